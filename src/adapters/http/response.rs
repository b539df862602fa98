//! Response mapper. Turns pipeline outcomes into status codes and JSON bodies.

use crate::domain::{AckShape, SubmissionError, SubmissionReceipt};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

pub const CONFIRMATION_MESSAGE: &str = "Thank you for your message. We'll get back to you soon!";

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            SubmissionError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            SubmissionError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            // Provider detail is logged by the delivery client; never echoed.
            SubmissionError::Delivery(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send email".to_string(),
            ),
            SubmissionError::Unexpected(detail) => {
                error!(detail = %detail, "unexpected failure handling submission");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl IntoResponse for SubmissionReceipt {
    fn into_response(self) -> Response {
        let body = match self.shape {
            AckShape::Confirmation => json!({
                "success": true,
                "message": CONFIRMATION_MESSAGE,
            }),
            AckShape::ProviderAck => json!({
                "success": true,
                "data": self.ack,
            }),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}
