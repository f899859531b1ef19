use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use crate::templates::{ApplicationFormTemplate, ThankYouTemplate};

use super::helpers::render_template;

// Embed the stylesheet and client script in the binary
const STYLESHEET: &str = include_str!("../../static/styles.css");
const FORM_SCRIPT: &str = include_str!("../../static/form.js");

pub const SUBMIT_PATH: &str = "/api/submit";

pub async fn form_get() -> impl IntoResponse {
    render_template(ApplicationFormTemplate::new(SUBMIT_PATH))
}

pub async fn thank_you_get() -> impl IntoResponse {
    render_template(ThankYouTemplate {
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

pub async fn form_script() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/javascript; charset=utf-8")], FORM_SCRIPT)
}
