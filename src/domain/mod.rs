//! Core domain layer. No network or provider dependencies.
//!
//! Entities, validation rules and the error taxonomy live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod validation;

pub use entities::{
    AckShape, ComposedEmail, DeliveryAck, FormProfile, OutboundEmail, RawSubmission,
    SubmissionFields, SubmissionReceipt, SubmissionRequest,
};
pub use errors::{DeliveryError, SubmissionError, ValidationError};
pub use validation::{is_valid_email, validate};
