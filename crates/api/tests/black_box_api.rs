use reqwest::StatusCode;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = kontor_api::app::build_app().expect("failed to build app");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post_chat(server: &TestServer, message: &str) -> (StatusCode, String) {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/chat/", server.base_url))
        .form(&[("message", message)])
        .send()
        .await
        .unwrap();

    let status = res.status();
    let body = res.text().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let server = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/health", server.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn invoice_request_returns_preview_fragment() {
    let server = TestServer::spawn().await;

    let (status, body) = post_chat(&server, "Ich möchte eine Rechnung").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("chat-message--ai"), "body: {body}");
    assert!(body.contains("Rechnungsentwurf"), "body: {body}");
    assert!(body.contains("950,00"), "body: {body}");
    assert!(body.contains("180,50"), "body: {body}");
    assert!(body.contains("1.130,50"), "body: {body}");
    assert!(body.contains("Musterfirma GmbH"), "body: {body}");
}

#[tokio::test]
async fn keyword_match_is_case_insensitive() {
    let server = TestServer::spawn().await;

    let (status, body) = post_chat(&server, "RECHNUNG erstellen bitte").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("chat-message--ai"), "body: {body}");
}

#[tokio::test]
async fn unmatched_message_returns_fallback_fragment() {
    let server = TestServer::spawn().await;

    let (status, body) = post_chat(&server, "Hallo").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("chat-message--error"), "body: {body}");
    assert!(body.contains("Das habe ich nicht verstanden"), "body: {body}");
}

#[tokio::test]
async fn missing_message_field_falls_back() {
    let server = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/chat/", server.base_url))
        .form(&[("unrelated", "x")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("nicht verstanden"), "body: {body}");
}

#[tokio::test]
async fn consecutive_previews_use_fresh_invoice_numbers() {
    let server = TestServer::spawn().await;

    let (_, first) = post_chat(&server, "Rechnung").await;
    let (_, second) = post_chat(&server, "Rechnung").await;

    let number = |body: &str| {
        let start = body.find("Rechnung RE-").expect("invoice number in fragment");
        body[start..start + 24].to_string()
    };

    assert_ne!(number(&first), number(&second));
}
