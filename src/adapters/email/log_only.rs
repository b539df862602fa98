//! Log-only email adapter for running without a provider key.
//!
//! Nothing leaves the process; the message is summarised in the log and a
//! synthetic acknowledgement is returned.

use crate::domain::{DeliveryAck, DeliveryError, OutboundEmail};
use crate::ports::EmailSender;
use chrono::Utc;
use tracing::info;

#[derive(Debug, Default)]
pub struct LogOnlyAdapter;

impl LogOnlyAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl EmailSender for LogOnlyAdapter {
    async fn send(&self, message: &OutboundEmail) -> Result<DeliveryAck, DeliveryError> {
        let id = format!("log-only-{}", Utc::now().timestamp_millis());
        info!(
            id = %id,
            to = ?message.to,
            subject = %message.subject,
            text_len = message.text.len(),
            html_len = message.html.len(),
            "[LOG-ONLY] notification not sent"
        );
        Ok(DeliveryAck { id })
    }

    fn provider_name(&self) -> &'static str {
        "log-only"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_only_acknowledges() {
        let message = OutboundEmail {
            from: "a <a@example.com>".to_string(),
            to: vec!["b@example.com".to_string()],
            reply_to: "c@example.com".to_string(),
            subject: "s".to_string(),
            html: "<p>h</p>".to_string(),
            text: "t".to_string(),
        };
        let ack = LogOnlyAdapter::new().send(&message).await.unwrap();
        assert!(ack.id.starts_with("log-only-"));
    }
}
