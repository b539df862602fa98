//! Domain entities. Pure data structures for the contact flow.
//!
//! No HTTP/provider types here. Adapters map into these.

use crate::domain::SubmissionError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Shape of the success body returned for an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckShape {
    /// `{success: true, message: <confirmation text>}`
    Confirmation,
    /// `{success: true, data: <provider ack>}`
    ProviderAck,
}

/// Field-name mapping and presentation for one entry point.
///
/// Both entry points run the same pipeline; they differ only in which wire
/// names they prefer, how the notification is labelled and what they answer.
/// The first name in each field list is the preferred one, the second is the
/// synonym accepted from the other form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormProfile {
    pub key: &'static str,
    pub title: &'static str,
    pub message_fields: [&'static str; 2],
    pub interest_fields: [&'static str; 2],
    pub message_label: &'static str,
    pub interest_label: &'static str,
    pub ack: AckShape,
}

impl FormProfile {
    /// General contact form (`message` / `service`).
    pub const CONTACT: FormProfile = FormProfile {
        key: "contact",
        title: "New Contact Form Submission",
        message_fields: ["message", "projectDescription"],
        interest_fields: ["service", "budgetRange"],
        message_label: "Message",
        interest_label: "Service Interest",
        ack: AckShape::Confirmation,
    };

    /// Project inquiry form (`projectDescription` / `budgetRange`).
    pub const PROJECT: FormProfile = FormProfile {
        key: "project",
        title: "New Project Inquiry",
        message_fields: ["projectDescription", "message"],
        interest_fields: ["budgetRange", "service"],
        message_label: "Project Description",
        interest_label: "Budget Range",
        ack: AckShape::ProviderAck,
    };

    /// Preferred wire name of the message field.
    pub fn message_field(&self) -> &'static str {
        self.message_fields[0]
    }
}

/// Untyped JSON object as received from the browser. Unknown keys are ignored.
#[derive(Debug, Clone)]
pub struct RawSubmission {
    fields: Map<String, Value>,
}

/// Candidate values pulled out of a raw submission, before validation.
/// Empty strings are already folded into `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub service_interest: Option<String>,
    pub message: Option<String>,
}

impl RawSubmission {
    /// Parse a request body. Anything but a JSON object is an unexpected failure.
    pub fn from_json(body: &[u8]) -> Result<Self, SubmissionError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| SubmissionError::Unexpected(format!("invalid JSON body: {}", e)))?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(SubmissionError::Unexpected(format!(
                "expected JSON object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Resolve the profile's field names into candidate values.
    ///
    /// Required fields reject a non-string value under any of their names.
    /// Optional fields skip such values.
    pub fn extract(&self, profile: &FormProfile) -> Result<SubmissionFields, SubmissionError> {
        Ok(SubmissionFields {
            name: self.required(&["name"])?,
            email: self.required(&["email"])?,
            company: self.optional(&["company"]),
            service_interest: self.optional(&profile.interest_fields),
            message: self.required(&profile.message_fields)?,
        })
    }

    fn required(&self, keys: &[&str]) -> Result<Option<String>, SubmissionError> {
        for key in keys {
            match self.fields.get(*key) {
                None | Some(Value::Null) | Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(SubmissionError::Unexpected(format!(
                        "field `{}` must be a string, got {}",
                        key,
                        json_type(other)
                    )));
                }
            }
        }
        Ok(self.optional(keys))
    }

    /// First non-empty string among `keys`.
    fn optional(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| match self.fields.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A validated submission. Only the validator builds one; it is never
/// mutated and is dropped once the delivery attempt returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub(in crate::domain) name: String,
    pub(in crate::domain) email: String,
    pub(in crate::domain) company: Option<String>,
    pub(in crate::domain) service_interest: Option<String>,
    pub(in crate::domain) message: String,
}

impl SubmissionRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn service_interest(&self) -> Option<&str> {
        self.service_interest.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Subject plus the two renderings of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Message handed to the email-sending capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Provider acknowledgement for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryAck {
    pub id: String,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub ack: DeliveryAck,
    pub shape: AckShape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = RawSubmission::from_json(br#"["name"]"#).unwrap_err();
        assert!(matches!(err, SubmissionError::Unexpected(_)));

        let err = RawSubmission::from_json(b"name=Jane").unwrap_err();
        assert!(matches!(err, SubmissionError::Unexpected(_)));
    }

    #[test]
    fn test_extract_uses_preferred_then_synonym() {
        let raw = RawSubmission::from_json(
            br#"{"name":"Jane","email":"jane@example.com","projectDescription":"Build a site","budgetRange":"10k-25k"}"#,
        )
        .unwrap();

        let contact = raw.extract(&FormProfile::CONTACT).unwrap();
        assert_eq!(contact.message.as_deref(), Some("Build a site"));
        assert_eq!(contact.service_interest.as_deref(), Some("10k-25k"));

        let raw = RawSubmission::from_json(
            br#"{"message":"from message","projectDescription":"from description"}"#,
        )
        .unwrap();
        assert_eq!(
            raw.extract(&FormProfile::CONTACT).unwrap().message.as_deref(),
            Some("from message")
        );
        assert_eq!(
            raw.extract(&FormProfile::PROJECT).unwrap().message.as_deref(),
            Some("from description")
        );
    }

    #[test]
    fn test_extract_folds_empty_and_null() {
        let raw = RawSubmission::from_json(
            br#"{"name":"Jane","company":"","service":null,"unknown":42}"#,
        )
        .unwrap();
        let fields = raw.extract(&FormProfile::CONTACT).unwrap();
        assert_eq!(fields.name.as_deref(), Some("Jane"));
        assert_eq!(fields.company, None);
        assert_eq!(fields.service_interest, None);
        assert_eq!(fields.email, None);
    }

    #[test]
    fn test_extract_skips_non_string_optional_fields() {
        let raw = RawSubmission::from_json(
            br#"{"name":"Jane","email":"jane@example.com","message":"hi","company":42,"service":["a"],"budgetRange":"$5k"}"#,
        )
        .unwrap();
        let fields = raw.extract(&FormProfile::CONTACT).unwrap();
        assert_eq!(fields.company, None);
        assert_eq!(fields.service_interest.as_deref(), Some("$5k"));
        assert_eq!(fields.message.as_deref(), Some("hi"));
    }

    #[test]
    fn test_required_synonym_type_checked_on_both_profiles() {
        let raw = RawSubmission::from_json(
            br#"{"name":"Jane","email":"jane@example.com","message":"hi","projectDescription":5}"#,
        )
        .unwrap();
        for profile in [FormProfile::CONTACT, FormProfile::PROJECT] {
            let err = raw.extract(&profile).unwrap_err();
            assert!(err.to_string().contains("projectDescription"), "{}", profile.key);
        }
    }

    #[test]
    fn test_extract_rejects_non_string_field() {
        let raw = RawSubmission::from_json(br#"{"name":"Jane","email":123}"#).unwrap();
        let err = raw.extract(&FormProfile::CONTACT).unwrap_err();
        assert!(err.to_string().contains("email"));
    }
}
