/// Error types for submission delivery
use thiserror::Error;

use crate::config::RelayMode;

/// Errors that can occur while handing a submission to a relay
#[derive(Debug, Error)]
pub enum RelayError {
    /// Selected relay lacks a URL or credential
    #[error("Relay {mode} is not configured: {reason}")]
    Misconfigured { mode: RelayMode, reason: &'static str },

    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Downstream answered with a non-2xx status
    #[error("Relay rejected submission: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Report could not be rendered
    #[error("Failed to render report: {0}")]
    Render(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RelayError::Network(format!("timed out: {}", e))
        } else {
            RelayError::Network(e.to_string())
        }
    }
}

impl From<askama::Error> for RelayError {
    fn from(e: askama::Error) -> Self {
        RelayError::Render(e.to_string())
    }
}
