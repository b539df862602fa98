//! In-memory EmailSender for tests. Records every message and answers with a
//! fixed outcome.

use crate::domain::{DeliveryAck, DeliveryError, OutboundEmail};
use crate::ports::EmailSender;
use std::sync::Mutex;

pub struct RecordingSender {
    outcome: Result<DeliveryAck, DeliveryError>,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingSender {
    pub fn accepting(id: &str) -> Self {
        Self {
            outcome: Ok(DeliveryAck { id: id.to_string() }),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DeliveryError) -> Self {
        Self {
            outcome: Err(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Messages handed to `send`, in call order.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, message: &OutboundEmail) -> Result<DeliveryAck, DeliveryError> {
        self.sent.lock().unwrap().push(message.clone());
        self.outcome.clone()
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}
