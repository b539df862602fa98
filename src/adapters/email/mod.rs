//! Email adapters. Implement EmailSender.
//!
//! Resend for production, log-only when no API key is configured.

pub mod log_only;
#[cfg(test)]
mod recording;
pub mod resend;

pub use log_only::LogOnlyAdapter;
#[cfg(test)]
pub(crate) use recording::RecordingSender;
pub use resend::{ResendAdapter, RESEND_EMAILS_URL};
