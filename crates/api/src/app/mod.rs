//! HTTP application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: service wiring (rule table, assembler, chat router, users)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `render.rs`: HTML chat fragments
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod render;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> anyhow::Result<Router> {
    let services = Arc::new(services::build_services()?);
    services::bootstrap_admin_from_env(&services.users);

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .route("/chat/", post(routes::chat::chat_endpoint))
        .layer(ServiceBuilder::new().layer(Extension(services))))
}
