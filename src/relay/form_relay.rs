use reqwest::multipart::Form;

use crate::config::RelaySettings;
use crate::form::{encode_pairs, SubmissionPayload};

/// Multipart body for Formspree-style relays: every submitted field
/// flattened back to its wire name, plus the relay's control fields.
pub fn relay_fields(payload: &SubmissionPayload, settings: &RelaySettings) -> Vec<(String, String)> {
    let mut fields = encode_pairs(payload);
    let reply_to = payload
        .first("Email_Address")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(settings.recipient_email.as_str())
        .to_string();
    fields.push(("email".to_string(), reply_to.clone()));
    fields.push(("_subject".to_string(), settings.subject.clone()));
    fields.push(("_replyto".to_string(), reply_to));
    fields
}

pub fn relay_form(fields: Vec<(String, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}
