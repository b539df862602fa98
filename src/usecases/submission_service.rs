//! Submission pipeline: parse -> validate -> compose -> deliver.
//!
//! - One pass per request, first failure wins
//! - Nothing is stored; the submission is dropped after the delivery attempt
//! - Both entry points share this service, differing only in `FormProfile`

use crate::domain::{
    validate, FormProfile, RawSubmission, SubmissionError, SubmissionReceipt,
};
use crate::ports::SubmissionPort;
use crate::usecases::composer::compose;
use crate::usecases::delivery_client::DeliveryClient;
use chrono::{DateTime, Utc};
use tracing::info;

/// Source of submission timestamps.
pub type Clock = fn() -> DateTime<Utc>;

pub struct SubmissionService {
    delivery: DeliveryClient,
    clock: Clock,
}

impl SubmissionService {
    pub fn new(delivery: DeliveryClient) -> Self {
        Self {
            delivery,
            clock: Utc::now,
        }
    }

    /// Replace the wall clock, e.g. for reproducible timestamps in tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait::async_trait]
impl SubmissionPort for SubmissionService {
    async fn submit(
        &self,
        profile: FormProfile,
        body: &[u8],
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let raw = RawSubmission::from_json(body)?;
        let fields = raw.extract(&profile)?;

        let submission = validate(fields, &profile).inspect_err(|e| {
            info!(form = profile.key, reason = %e, "submission rejected");
        })?;

        let email = compose(&submission, &profile, (self.clock)());
        let ack = self.delivery.deliver(&submission, email).await?;

        info!(form = profile.key, id = %ack.id, "submission relayed");
        Ok(SubmissionReceipt {
            ack,
            shape: profile.ack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::RecordingSender;
    use crate::domain::{AckShape, DeliveryError, ValidationError};
    use crate::usecases::delivery_client::DEFAULT_SENDER;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn service(sender: Arc<RecordingSender>) -> SubmissionService {
        let delivery = DeliveryClient::new(
            sender,
            DEFAULT_SENDER.to_string(),
            "inbox@studio.test".to_string(),
        );
        SubmissionService::new(delivery).with_clock(fixed_clock)
    }

    #[tokio::test]
    async fn test_jane_doe_scenario() {
        let sender = Arc::new(RecordingSender::accepting("re_123"));
        let svc = service(sender.clone());

        let receipt = svc
            .submit(
                FormProfile::CONTACT,
                br#"{"name":"Jane Doe","email":"jane@example.com","message":"Need a quote"}"#,
            )
            .await
            .unwrap();
        assert_eq!(receipt.ack.id, "re_123");
        assert_eq!(receipt.shape, AckShape::Confirmation);

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to, "jane@example.com");
        assert_eq!(sent[0].to, vec!["inbox@studio.test".to_string()]);

        let lines: Vec<&str> = sent[0].text.lines().collect();
        assert!(lines.contains(&"Name: Jane Doe"));
        assert!(lines.contains(&"Email: jane@example.com"));
        assert!(lines.contains(&"Message:"));
        assert!(lines.contains(&"Need a quote"));
        assert!(lines.contains(&"Submitted: 2024-01-02 03:04:05 UTC"));
        assert!(!lines.iter().any(|l| l.starts_with("Company")));
        assert!(!lines.iter().any(|l| l.starts_with("Service Interest")));
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_delivery_attempt() {
        let sender = Arc::new(RecordingSender::accepting("unused"));
        let svc = service(sender.clone());

        let err = svc
            .submit(
                FormProfile::CONTACT,
                br#"{"name":"A","email":"not-an-email","message":"hi"}"#,
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Validation(ValidationError::MalformedEmail)
        ));
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_project_profile_reads_project_fields() {
        let sender = Arc::new(RecordingSender::accepting("re_456"));
        let svc = service(sender.clone());

        let receipt = svc
            .submit(
                FormProfile::PROJECT,
                br#"{"name":"Sam","email":"sam@example.org","company":"Acme","projectDescription":"New storefront","budgetRange":"$5k-$10k"}"#,
            )
            .await
            .unwrap();
        assert_eq!(receipt.shape, AckShape::ProviderAck);

        let sent = sender.sent();
        assert_eq!(sent[0].subject, "New Project Inquiry from Sam");
        assert!(sent[0].text.contains("Company: Acme\n"));
        assert!(sent[0].text.contains("Budget Range: $5k-$10k\n"));
        assert!(sent[0].text.contains("Project Description:\nNew storefront\n"));
    }

    #[tokio::test]
    async fn test_delivery_failure_surfaces_as_delivery_error() {
        let sender = Arc::new(RecordingSender::failing(DeliveryError::Transport(
            "connection refused".to_string(),
        )));
        let svc = service(sender.clone());

        let err = svc
            .submit(
                FormProfile::CONTACT,
                br#"{"name":"Jane","email":"jane@example.com","message":"hi"}"#,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Delivery(_)));
        assert_eq!(sender.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_unexpected() {
        let sender = Arc::new(RecordingSender::accepting("unused"));
        let svc = service(sender.clone());

        let err = svc
            .submit(FormProfile::CONTACT, b"{\"name\": ")
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Unexpected(_)));
        assert!(sender.sent().is_empty());
    }
}
