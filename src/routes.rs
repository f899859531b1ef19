use axum::extract::DefaultBodyLimit;
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{pages, submit};
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    // Asset URLs carry the crate version, so they can be cached for good
    let assets = Router::new()
        .route("/styles.css", get(pages::stylesheet))
        .route("/form.js", get(pages::form_script))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        ));

    Router::new()
        .route("/", get(pages::form_get))
        .route("/thank-you", get(pages::thank_you_get))
        .route("/healthz", get(pages::healthz))
        .route(pages::SUBMIT_PATH, post(submit::submit_post))
        .nest("/static", assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(state.config.max_body_bytes)),
        )
        .with_state(state)
}
