//! Delivery of decoded submissions to the configured relay.
//!
//! [`Dispatcher::dispatch`] makes a single outbound call, bounded by the
//! configured timeout, and reports the outcome to its caller. Whether a
//! failure matters is the caller's decision.

mod email;
mod error;
mod form_relay;

pub use email::{build_message, EmailMessage};
pub use error::RelayError;
pub use form_relay::{relay_fields, relay_form};

use reqwest::header::ACCEPT;

use crate::config::{RelayMode, RelaySettings};
use crate::form::SubmissionPayload;

/// Successful hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub mode: RelayMode,
    /// HTTP status returned by the relay; `None` when nothing was sent.
    pub status: Option<u16>,
}

pub struct Dispatcher {
    client: reqwest::Client,
    settings: RelaySettings,
}

impl Dispatcher {
    pub fn new(settings: RelaySettings) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("jobform/{}", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { client, settings })
    }

    pub async fn dispatch(&self, payload: &SubmissionPayload) -> Result<Delivery, RelayError> {
        let mode = self.settings.mode;
        if let Some(reason) = self.settings.missing() {
            return Err(RelayError::Misconfigured { mode, reason });
        }
        let status = match mode {
            RelayMode::Disabled => {
                tracing::info!("Relay disabled; submission not forwarded");
                None
            }
            RelayMode::FormRelay => Some(self.send_form(payload).await?),
            RelayMode::Email => Some(self.send_email(payload).await?),
        };
        Ok(Delivery { mode, status })
    }

    async fn send_form(&self, payload: &SubmissionPayload) -> Result<u16, RelayError> {
        let url = self.settings.form_relay_url.as_deref().unwrap_or_default();
        let fields = relay_fields(payload, &self.settings);
        tracing::debug!(%url, fields = fields.len(), "POST form relay");
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .multipart(relay_form(fields))
            .send()
            .await?;
        check_status(response).await
    }

    async fn send_email(&self, payload: &SubmissionPayload) -> Result<u16, RelayError> {
        let message = build_message(payload, &self.settings)?;
        let api_key = self.settings.email_api_key.as_deref().unwrap_or_default();
        tracing::debug!(url = %self.settings.email_api_url, to = ?message.to, "POST email API");
        let response = self
            .client
            .post(&self.settings.email_api_url)
            .bearer_auth(api_key)
            .json(&message)
            .send()
            .await?;
        check_status(response).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<u16, RelayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(status.as_u16());
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(RelayError::Rejected {
        status: status.as_u16(),
        body,
    })
}
