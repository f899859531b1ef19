#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tower::ServiceExt;

use jobform::config::Config;
use jobform::models::{AppState, SubmitResponse};

pub const END_TO_END_BODY: &str =
    "Name=Jane+Doe&Email_Address=jane%40x.com&Experience[0][CompanyName]=Acme&Experience[0][Position]=Eng";

pub const URLENCODED: &str = "application/x-www-form-urlencoded";

pub fn app(config: Config) -> Router {
    jobform::build_router(AppState::new(config).unwrap())
}

pub async fn post_form(app: Router, content_type: &str, body: impl Into<Body>) -> (StatusCode, SubmitResponse) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/submit")
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: SubmitResponse = serde_json::from_slice(&bytes).unwrap();
    (status, parsed)
}

/// Hand-written multipart body with boundary `XYZ`.
pub fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str("--XYZ\r\n");
        body.push_str(&format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name));
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str("--XYZ--\r\n");
    body
}

pub const MULTIPART: &str = "multipart/form-data; boundary=XYZ";

/// What the fake relay saw.
#[derive(Debug, Clone, Default)]
pub struct Captured {
    pub authorization: Option<String>,
    pub json: Option<Value>,
    pub fields: Vec<(String, String)>,
}

#[derive(Clone)]
struct Fake {
    status: StatusCode,
    delay_ms: u64,
    seen: Arc<Mutex<Vec<Captured>>>,
}

async fn fake_email(State(fake): State<Fake>, headers: HeaderMap, Json(json): Json<Value>) -> StatusCode {
    tokio::time::sleep(std::time::Duration::from_millis(fake.delay_ms)).await;
    fake.seen.lock().unwrap().push(Captured {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        json: Some(json),
        fields: Vec::new(),
    });
    fake.status
}

async fn fake_form(State(fake): State<Fake>, mut multipart: Multipart) -> StatusCode {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        fields.push((name, field.text().await.unwrap()));
    }
    fake.seen.lock().unwrap().push(Captured {
        fields,
        ..Captured::default()
    });
    fake.status
}

/// Start a fake relay on an ephemeral port. Returns its base URL and the
/// requests it receives.
pub async fn spawn_fake_relay(status: StatusCode, delay_ms: u64) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fake = Fake {
        status,
        delay_ms,
        seen: seen.clone(),
    };
    let router = Router::new()
        .route("/emails", post(fake_email))
        .route("/f/test", post(fake_form))
        .with_state(fake);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}", addr), seen)
}
