use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::SubmitResponse;

/// Shown to applicants whenever a request cannot be processed.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit application. Please try again.";

/// Failures that abort a submission request.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed form body: {0}")]
    MalformedBody(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Error processing form submission");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SubmitResponse::failure(GENERIC_FAILURE_MESSAGE)),
        )
            .into_response()
    }
}
