//! Submission validation. The only way to obtain a `SubmissionRequest`.

use crate::domain::{FormProfile, SubmissionFields, SubmissionRequest, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Check required fields and the email shape. Values are kept as received.
///
/// Missing fields are reported before a malformed email, so a request lacking
/// `name` with a bad address still gets the missing-fields answer.
pub fn validate(
    fields: SubmissionFields,
    profile: &FormProfile,
) -> Result<SubmissionRequest, ValidationError> {
    let SubmissionFields {
        name,
        email,
        company,
        service_interest,
        message,
    } = fields;

    let (name, email, message) = match (name, email, message) {
        (Some(name), Some(email), Some(message)) => (name, email, message),
        (name, email, message) => {
            let missing = [
                (name.is_none(), "name"),
                (email.is_none(), "email"),
                (message.is_none(), profile.message_field()),
            ]
            .into_iter()
            .filter_map(|(absent, field)| absent.then_some(field))
            .collect();
            return Err(ValidationError::MissingFields(missing));
        }
    };

    if !is_valid_email(&email) {
        return Err(ValidationError::MalformedEmail);
    }

    Ok(SubmissionRequest {
        name,
        email,
        company,
        service_interest,
        message,
    })
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
