use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse},
    Form,
};

use crate::app::dto::ChatForm;
use crate::app::services::AppServices;
use crate::app::{errors, render};

/// `POST /chat/` — route a chat message and answer with an HTML fragment.
pub async fn chat_endpoint(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<ChatForm>,
) -> axum::response::Response {
    let message = form.message.trim();

    match services.chat.route(message) {
        Ok(reply) => {
            tracing::debug!(state = ?reply.state, "chat turn routed");
            (StatusCode::OK, Html(render::chat_reply_fragment(&reply))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "invoice preview failed");
            errors::html_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Der Rechnungsentwurf konnte nicht erstellt werden.",
            )
        }
    }
}
