//! Request handlers. Thin: pick a form profile, pass the raw body through.

use crate::adapters::http::AppState;
use crate::domain::{FormProfile, SubmissionError, SubmissionReceipt};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

/// `POST /api/contact`
pub async fn contact(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<SubmissionReceipt, SubmissionError> {
    submit(&state, FormProfile::CONTACT, body).await
}

/// `POST /api/send-email`
pub async fn project_inquiry(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<SubmissionReceipt, SubmissionError> {
    submit(&state, FormProfile::PROJECT, body).await
}

async fn submit(
    state: &AppState,
    profile: FormProfile,
    body: Result<Bytes, BytesRejection>,
) -> Result<SubmissionReceipt, SubmissionError> {
    let body = body.map_err(|e| SubmissionError::Unexpected(format!("unreadable body: {}", e)))?;
    state.submissions.submit(profile, &body).await
}

/// Any method other than POST on a form route.
pub async fn method_not_allowed() -> SubmissionError {
    SubmissionError::MethodNotAllowed
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
