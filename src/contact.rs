//! Contact form → pre-filled email draft.
//!
//! Submission never sends anything itself: the field values are serialized
//! into a `mailto:` URI and the browser is navigated to it, handing the
//! draft to the user's email client. Because a `mailto:` navigation cannot
//! confirm success, the status line shows two unconditional messages in
//! sequence — "opening" immediately, then a copy-and-send-manually fallback
//! after a fixed delay.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt::Write as _;

use crate::consts::{CONTACT_EMAIL, MAILTO_FALLBACK_DELAY_MS};
use crate::effect::{Effect, Task};

/// Status line shown immediately on submit.
pub const STATUS_OPENING: &str = "Opening your email client…";

/// Status line shown after the fallback delay, unconditionally.
pub const STATUS_FALLBACK: &str =
    "If your email client didn’t open, copy your message and email me directly.";

/// The contact form's field values, read once at submit time. Absent fields
/// default to the empty string; nothing is validated.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub message: String,
}

/// Build the `mailto:` URI for a submission: recipient, percent-encoded
/// subject, and a percent-encoded plain-text body labeling every field.
#[must_use]
pub fn mailto_uri(fields: &FormFields, timestamp: &str, page_url: &str) -> String {
    let subject_name = if fields.name.is_empty() { "Website" } else { fields.name.as_str() };
    let subject = format!("New consulting inquiry: {subject_name}");

    let mut body = String::new();
    let _ = writeln!(body, "Timestamp: {timestamp}");
    let _ = writeln!(body, "Page: {page_url}");
    let _ = writeln!(body);
    let _ = writeln!(body, "Name: {}", fields.name);
    let _ = writeln!(body, "Email: {}", fields.email);
    let _ = writeln!(body, "Company: {}", fields.company);
    let _ = writeln!(body, "Budget: {}", fields.budget);
    let _ = writeln!(body);
    let _ = writeln!(body, "Message:");
    let _ = write!(body, "{}", fields.message);

    format!(
        "mailto:{CONTACT_EMAIL}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Handle a form submission: show the opening status, hand the draft to the
/// email client, and arm the fallback status flip.
#[must_use]
pub fn submit(fields: &FormFields, timestamp: &str, page_url: &str) -> Vec<Effect> {
    vec![
        Effect::FormStatus(STATUS_OPENING),
        Effect::Navigate(mailto_uri(fields, timestamp, page_url)),
        Effect::Schedule { delay_ms: MAILTO_FALLBACK_DELAY_MS, task: Task::FormFallback },
    ]
}

/// The fallback task fired: overwrite the status line.
#[must_use]
pub fn fallback() -> Vec<Effect> {
    vec![Effect::FormStatus(STATUS_FALLBACK)]
}
