use serde::Serialize;

use crate::config::RelaySettings;
use crate::form::SubmissionPayload;
use crate::report::{render_html, render_text, Report, NOT_AVAILABLE};

use super::RelayError;

/// Request body of the Resend `POST /emails` call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

pub fn build_message(payload: &SubmissionPayload, settings: &RelaySettings) -> Result<EmailMessage, RelayError> {
    let report = Report::build(payload);
    let subject = if report.applicant == NOT_AVAILABLE {
        settings.subject.clone()
    } else {
        format!("{}: {}", settings.subject, report.applicant)
    };
    Ok(EmailMessage {
        from: settings.sender_email.clone(),
        to: split_addresses(&settings.recipient_email),
        cc: settings.cc_email.as_deref().map(split_addresses).unwrap_or_default(),
        reply_to: payload
            .first("Email_Address")
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string),
        subject,
        text: render_text(&report),
        html: render_html(&report)?,
    })
}

/// `a@x.com, b@y.com` to a list, dropping blanks.
fn split_addresses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::decode_pairs;

    #[test]
    fn message_carries_both_bodies() {
        let payload = decode_pairs([
            ("Name", "Jane Doe"),
            ("Email_Address", "jane@x.com"),
            ("Experience[0][CompanyName]", "Acme"),
        ]);
        let settings = RelaySettings {
            recipient_email: "hr@ebny.com.eg, jobs@ebny.com.eg".into(),
            cc_email: Some("lead@ebny.com.eg".into()),
            ..RelaySettings::default()
        };
        let message = build_message(&payload, &settings).unwrap();
        assert_eq!(message.to, vec!["hr@ebny.com.eg", "jobs@ebny.com.eg"]);
        assert_eq!(message.cc, vec!["lead@ebny.com.eg"]);
        assert_eq!(message.reply_to.as_deref(), Some("jane@x.com"));
        assert_eq!(message.subject, format!("{}: Jane Doe", settings.subject));
        assert!(message.text.contains("Experience #1"));
        assert!(message.html.contains("<td>Acme</td>"));
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let message = build_message(&SubmissionPayload::new(), &RelaySettings::default()).unwrap();
        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("cc").is_none());
        assert!(json.get("reply_to").is_none());
        assert_eq!(json["subject"], RelaySettings::default().subject);
    }
}
