use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::utils::parse_urlencoded_pairs;

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Submitted form fields in arrival order, from either a multipart or a
/// URL-encoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPairs(pub Vec<(String, String)>);

#[async_trait]
impl<S> FromRequest<S> for FormPairs
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::MalformedBody(e.to_string()))?;
            return read_multipart(multipart).await.map(FormPairs);
        }

        if content_type.is_empty() || content_type.starts_with("application/x-www-form-urlencoded") {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::MalformedBody(e.to_string()))?;
            let raw = std::str::from_utf8(&bytes).map_err(|e| AppError::MalformedBody(e.to_string()))?;
            return Ok(FormPairs(parse_urlencoded_pairs(raw)));
        }

        Err(AppError::UnsupportedContentType(content_type))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<Vec<(String, String)>, AppError> {
    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedBody(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let value = field
            .text()
            .await
            .map_err(|e| AppError::MalformedBody(e.to_string()))?;
        pairs.push((name, value));
    }
    Ok(pairs)
}
