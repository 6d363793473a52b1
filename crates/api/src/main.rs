#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kontor_observability::init();

    let bind_addr =
        std::env::var("KONTOR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = kontor_api::app::build_app()?;

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
