use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::form::{DEFAULT_MAX_GROUP_INDEX, DEFAULT_MAX_GROUP_SLOTS};

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RECIPIENT_EMAIL: &str = "hr@ebny.com.eg";
pub const DEFAULT_SENDER_EMAIL: &str = "Job Applications <onboarding@resend.dev>";
pub const DEFAULT_SUBJECT: &str = "New Job Application Submission - EBNY";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";
pub const FORMSPREE_BASE_URL: &str = "https://formspree.io/f";
pub const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Where a submission is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayMode {
    /// Re-encoded form fields POSTed to Formspree or a compatible endpoint.
    FormRelay,
    /// Text and HTML report sent through the Resend email API.
    Email,
    /// Submissions are only logged.
    Disabled,
}

impl FromStr for RelayMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "formspree" | "formsubmit" | "form" | "form-relay" => Ok(RelayMode::FormRelay),
            "resend" | "email" => Ok(RelayMode::Email),
            "none" | "off" | "disabled" => Ok(RelayMode::Disabled),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelayMode::FormRelay => "form-relay",
            RelayMode::Email => "email",
            RelayMode::Disabled => "disabled",
        };
        f.write_str(name)
    }
}

/// Everything the dispatcher needs, resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySettings {
    pub mode: RelayMode,
    pub recipient_email: String,
    pub cc_email: Option<String>,
    pub sender_email: String,
    pub subject: String,
    pub form_relay_url: Option<String>,
    pub email_api_url: String,
    pub email_api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            mode: RelayMode::Disabled,
            recipient_email: DEFAULT_RECIPIENT_EMAIL.to_string(),
            cc_email: None,
            sender_email: DEFAULT_SENDER_EMAIL.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            form_relay_url: None,
            email_api_url: DEFAULT_RESEND_API_URL.to_string(),
            email_api_key: None,
            timeout: Duration::from_secs(DEFAULT_RELAY_TIMEOUT_SECS),
        }
    }
}

impl RelaySettings {
    /// Describes what is missing for the selected mode, if anything.
    pub fn missing(&self) -> Option<&'static str> {
        match self.mode {
            RelayMode::FormRelay if self.form_relay_url.is_none() => {
                Some("FORMSPREE_ID or FORM_RELAY_URL is not set")
            }
            RelayMode::Email if self.email_api_key.is_none() => Some("RESEND_API_KEY is not set"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub relay: RelaySettings,
    pub max_group_index: usize,
    pub max_group_slots: usize,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relay: RelaySettings::default(),
            max_group_index: DEFAULT_MAX_GROUP_INDEX,
            max_group_slots: DEFAULT_MAX_GROUP_SLOTS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let email_api_key = var("RESEND_API_KEY");
        let mode = match var("RELAY_MODE") {
            Some(raw) => raw
                .parse::<RelayMode>()
                .map_err(|_| ConfigError::InvalidValue { key: "RELAY_MODE", value: raw })?,
            None if email_api_key.is_some() => RelayMode::Email,
            None => RelayMode::FormRelay,
        };

        let form_relay_url = var("FORM_RELAY_URL")
            .map(|u| sanitize_base_url(&u))
            .or_else(|| var("FORMSPREE_ID").map(|id| format!("{}/{}", FORMSPREE_BASE_URL, id)));

        let relay = RelaySettings {
            mode,
            recipient_email: var("RECIPIENT_EMAIL").unwrap_or_else(|| DEFAULT_RECIPIENT_EMAIL.to_string()),
            cc_email: var("CC_EMAIL"),
            sender_email: var("SENDER_EMAIL").unwrap_or_else(|| DEFAULT_SENDER_EMAIL.to_string()),
            subject: var("MAIL_SUBJECT").unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            form_relay_url,
            email_api_url: var("RESEND_API_URL")
                .map(|u| sanitize_base_url(&u))
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            email_api_key,
            timeout: Duration::from_secs(parse_or(var("RELAY_TIMEOUT_SECS"), "RELAY_TIMEOUT_SECS", DEFAULT_RELAY_TIMEOUT_SECS)?),
        };

        Ok(Self {
            relay,
            max_group_index: parse_or(var("MAX_GROUP_INDEX"), "MAX_GROUP_INDEX", DEFAULT_MAX_GROUP_INDEX)?,
            max_group_slots: parse_or(var("MAX_GROUP_SLOTS"), "MAX_GROUP_SLOTS", DEFAULT_MAX_GROUP_SLOTS)?,
            max_body_bytes: parse_or(var("MAX_BODY_BYTES"), "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Keep the first and last two characters of a secret for display.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 6 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 4), tail)
}
