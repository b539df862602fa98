//! Email composer. Renders the notification for a validated submission.
//!
//! Pure: the same submission, profile and timestamp always give the same output.

use crate::domain::{ComposedEmail, FormProfile, SubmissionRequest};
use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Build subject, HTML and plain-text bodies.
///
/// Company and interest lines are left out entirely when absent. The message
/// body keeps its whitespace and newlines in both renderings.
pub fn compose(
    submission: &SubmissionRequest,
    profile: &FormProfile,
    submitted_at: DateTime<Utc>,
) -> ComposedEmail {
    let timestamp = submitted_at.format(TIMESTAMP_FORMAT).to_string();

    ComposedEmail {
        subject: format!("{} from {}", profile.title, submission.name()),
        html: render_html(submission, profile, &timestamp),
        text: render_text(submission, profile, &timestamp),
    }
}

/// Label/value rows shared by both renderings, in display order.
fn detail_rows<'a>(
    submission: &'a SubmissionRequest,
    profile: &FormProfile,
) -> Vec<(&'static str, &'a str)> {
    let mut rows = vec![("Name", submission.name()), ("Email", submission.email())];
    if let Some(company) = submission.company() {
        rows.push(("Company", company));
    }
    if let Some(interest) = submission.service_interest() {
        rows.push((profile.interest_label, interest));
    }
    rows
}

fn render_text(submission: &SubmissionRequest, profile: &FormProfile, timestamp: &str) -> String {
    let mut text = String::new();
    text.push_str(profile.title);
    text.push_str("\n\n");

    for (label, value) in detail_rows(submission, profile) {
        text.push_str(&format!("{}: {}\n", label, value));
    }

    text.push_str(&format!("\n{}:\n", profile.message_label));
    text.push_str(submission.message());
    text.push_str("\n\n---\n");
    text.push_str(&format!("Submitted: {}\n", timestamp));
    text
}

fn render_html(submission: &SubmissionRequest, profile: &FormProfile, timestamp: &str) -> String {
    let mut rows = String::new();
    for (label, value) in detail_rows(submission, profile) {
        let value = if label == "Email" {
            format!(
                r#"<a href="mailto:{}" style="color: #2563eb;">{}</a>"#,
                escape_attr(value),
                escape_text(value)
            )
        } else {
            escape_text(value)
        };
        rows.push_str(&format!(
            concat!(
                "        <tr>\n",
                "          <td style=\"padding: 6px 16px 6px 0; font-weight: bold; vertical-align: top;\">{}:</td>\n",
                "          <td style=\"padding: 6px 0;\">{}</td>\n",
                "        </tr>\n"
            ),
            label, value
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
  </head>
  <body style="margin: 0; padding: 24px; background: #f9fafb; font-family: Arial, Helvetica, sans-serif; color: #1f2937; line-height: 1.5;">
    <div style="max-width: 600px; margin: 0 auto; background: #ffffff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 24px;">
      <h2 style="margin-top: 0; color: #111827;">{title}</h2>
      <table style="border-collapse: collapse; width: 100%;">
{rows}      </table>
      <h3 style="margin-bottom: 8px; color: #111827;">{message_label}</h3>
      <div style="white-space: pre-wrap; background: #f3f4f6; border-radius: 6px; padding: 12px;">{message}</div>
      <p style="margin-top: 24px; font-size: 12px; color: #6b7280;">Submitted: {timestamp}</p>
    </div>
  </body>
</html>
"#,
        title = profile.title,
        rows = rows,
        message_label = profile.message_label,
        message = escape_text(submission.message()),
        timestamp = timestamp,
    )
}

/// Escaping for text nodes. Quotes pass through unchanged.
fn escape_text(input: &str) -> String {
    escape(input, false)
}

/// Escaping for double-quoted attribute values.
fn escape_attr(input: &str) -> String {
    escape(input, true)
}

fn escape(input: &str, quotes: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
