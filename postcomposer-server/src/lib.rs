//! HTTP API for PostComposer
//!
//! Exposes the user directory and the media catalog over JSON. The router is
//! built by [`build_app`] so tests can drive it without binding a socket.

pub mod error;
pub mod media;
pub mod users;

use std::sync::Arc;

use axum::{routing::get, Router};
use libpostcomposer::service::ComposerService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state
pub type AppState = Arc<ComposerService>;

/// Build the application router over an already-initialized service
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/media", get(media::list_media))
        .route("/health", get(health))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "OK"
}
