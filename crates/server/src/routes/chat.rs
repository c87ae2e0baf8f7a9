//! Triage chat endpoint

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;
use triage_core::SymptomQuery;

use crate::AppState;
use crate::error::AppError;

/// Request body for chat
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    patient_description: Option<String>,
}

/// POST /api/chat - Triage a symptom description
///
/// Validates the description before anything else, so a blank request never
/// reaches the model. Responds with all six triage sections.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = run(&state, body).await;

    let label = match &outcome {
        Ok(_) => "ok",
        Err(AppError::BadRequest(_)) => "bad_request",
        Err(AppError::ServiceUnavailable(_)) => "unconfigured",
        Err(AppError::Internal(_)) => "upstream_error",
    };
    metrics::counter!("triage_requests_total", "outcome" => label).increment(1);

    outcome.map(Json)
}

async fn run(
    state: &AppState,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<triage_core::TriageResult, AppError> {
    let Json(body) = body?;
    let query = SymptomQuery::new(body.patient_description.unwrap_or_default())?;

    let client = state.client.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("GEMINI_API_KEY not configured".to_string())
    })?;

    tracing::info!(
        description_len = query.description().len(),
        "Triage request"
    );

    crate::ai::triage::analyze(client, &state.parser, &query)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Triage failed");
            AppError::from(e)
        })
}
