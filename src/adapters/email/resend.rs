//! Resend adapter. Implements EmailSender via the Resend REST API.

use crate::domain::{DeliveryAck, DeliveryError, OutboundEmail};
use crate::ports::EmailSender;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";

/// Resend (or Resend-compatible) email API adapter.
///
/// Requires an API key from https://resend.com/api-keys. Every request is
/// bounded by `timeout`; a timed-out call is reported as a transport failure.
pub struct ResendAdapter {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ResendAdapter {
    /// Create a new Resend adapter.
    ///
    /// # Arguments
    /// * `api_url` - Send endpoint (e.g. "https://api.resend.com/emails")
    /// * `api_key` - Resend API key
    /// * `timeout` - Upper bound for a single send request
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeliveryError::Transport(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

/// Resend send-email request body.
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

/// Resend send-email response body.
#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[async_trait::async_trait]
impl EmailSender for ResendAdapter {
    async fn send(&self, message: &OutboundEmail) -> Result<DeliveryAck, DeliveryError> {
        let request = SendEmailRequest {
            from: &message.from,
            to: &message.to,
            reply_to: &message.reply_to,
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "Resend API returned error");
            return Err(DeliveryError::Provider {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        let body: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| DeliveryError::InvalidResponse(e.to_string()))?;

        debug!(id = %body.id, "Resend accepted message");
        Ok(DeliveryAck { id: body.id })
    }

    fn provider_name(&self) -> &'static str {
        "resend"
    }
}
