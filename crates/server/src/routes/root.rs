//! Root liveness endpoint

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

/// GET / - Fixed status message
pub async fn get() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Medical Assistant API is running",
    })
}
