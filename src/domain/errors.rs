//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Why a submission was rejected before any delivery attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Wire names of the required fields that were absent or empty.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email address")]
    MalformedEmail,
}

/// Failure reported by the email-sending capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Email provider request failed: {0}")]
    Transport(String),

    #[error("Email provider error {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Unreadable email provider response: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to send email: {0}")]
    Delivery(#[from] DeliveryError),

    /// Catch-all for anything else (bad JSON, wrong field types, panics).
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}
