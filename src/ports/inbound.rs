//! Inbound port. The HTTP adapter calls into the application.

use crate::domain::{FormProfile, SubmissionError, SubmissionReceipt};

/// Input port: one contact-form submission, start to finish.
#[async_trait::async_trait]
pub trait SubmissionPort: Send + Sync {
    /// Parse, validate, compose and deliver `body` using the field mapping of `profile`.
    /// Terminates at the first failure.
    async fn submit(
        &self,
        profile: FormProfile,
        body: &[u8],
    ) -> Result<SubmissionReceipt, SubmissionError>;
}
