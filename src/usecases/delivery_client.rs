//! Delivery client. Addresses a composed notification and hands it to the
//! email-sending capability exactly once.

use crate::domain::{ComposedEmail, DeliveryAck, DeliveryError, OutboundEmail, SubmissionRequest};
use crate::ports::EmailSender;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Fixed sending identity: display name plus sending address.
pub const DEFAULT_SENDER: &str = "Website Contact Form <onboarding@resend.dev>";

/// Built once at startup and shared by every request.
pub struct DeliveryClient {
    sender: Arc<dyn EmailSender>,
    from: String,
    recipient: String,
}

impl DeliveryClient {
    /// # Arguments
    /// * `sender` - Email capability (Resend, log-only, ...)
    /// * `from` - Sender identity, e.g. `Name <address>`
    /// * `recipient` - Inbox that receives every notification
    pub fn new(sender: Arc<dyn EmailSender>, from: String, recipient: String) -> Self {
        Self {
            sender,
            from,
            recipient,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Send one notification. The submitter becomes the reply-to address.
    ///
    /// Provider failures are logged here with full detail and returned unchanged;
    /// no retry is attempted.
    pub async fn deliver(
        &self,
        submission: &SubmissionRequest,
        email: ComposedEmail,
    ) -> Result<DeliveryAck, DeliveryError> {
        let message = OutboundEmail {
            from: self.from.clone(),
            to: vec![self.recipient.clone()],
            reply_to: submission.email().to_string(),
            subject: email.subject,
            html: email.html,
            text: email.text,
        };

        debug!(reply_to = %message.reply_to, "addressing notification");
        info!(
            provider = self.sender.provider_name(),
            to = %self.recipient,
            "sending notification email"
        );

        match self.sender.send(&message).await {
            Ok(ack) => {
                info!(provider = self.sender.provider_name(), id = %ack.id, "email accepted");
                Ok(ack)
            }
            Err(e) => {
                error!(provider = self.sender.provider_name(), error = %e, "email delivery failed");
                Err(e)
            }
        }
    }
}
