use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::app::render;

/// Error chat bubble with the given status.
pub fn html_error(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Html(render::error_fragment(message))).into_response()
}
