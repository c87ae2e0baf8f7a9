pub mod chat;
pub mod health;
pub mod metrics;
pub mod root;

use axum::{Router, routing::post};

use crate::AppState;

/// Build triage routes
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/chat", post(chat::chat))
}
