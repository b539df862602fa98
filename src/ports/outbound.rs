//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DeliveryAck, DeliveryError, OutboundEmail};

/// Email-sending capability (e.g. Resend).
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    /// Hand one message to the provider. A single attempt; callers must not
    /// expect retries from implementations.
    async fn send(&self, message: &OutboundEmail) -> Result<DeliveryAck, DeliveryError>;

    /// Short provider name for logs.
    fn provider_name(&self) -> &'static str;
}
