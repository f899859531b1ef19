use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::models::{AppState, SubmitResponse};

use super::helpers::FormPairs;

pub const SUCCESS_MESSAGE: &str = "Application submitted successfully!";

/// Decode the submission and hand it to the relay.
///
/// Once the body has been parsed the applicant always gets a success
/// response; relay failures are logged and nothing else.
pub async fn submit_post(
    State(state): State<AppState>,
    FormPairs(pairs): FormPairs,
) -> impl IntoResponse {
    let payload = state.decoder.decode(pairs);

    let groups: Vec<String> = payload
        .groups()
        .map(|(name, group)| format!("{}={}", name, group.records().count()))
        .collect();
    tracing::info!(
        scalars = payload.scalars().count(),
        groups = ?groups,
        "Form submission received"
    );
    tracing::debug!(
        payload = %serde_json::to_string(&payload).unwrap_or_default(),
        "Decoded submission"
    );

    match state.dispatcher.dispatch(&payload).await {
        Ok(delivery) => {
            tracing::info!(mode = %delivery.mode, status = ?delivery.status, "Submission forwarded");
        }
        Err(e) => {
            tracing::error!(%e, "Error forwarding submission; acknowledging anyway");
        }
    }

    (StatusCode::OK, Json(SubmitResponse::success(SUCCESS_MESSAGE)))
}
