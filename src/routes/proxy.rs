//! Forwarding of the booking endpoints to the backend service.
//!
//! ERROR HANDLING
//! ==============
//! Backend statuses and bodies pass through untouched, so a backend `{ "error" }`
//! on a 4xx/5xx still reaches the form. Only failures to talk to the backend
//! at all become a `502`/`504` with a JSON `error` body.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::state::HostState;

/// Failure to obtain a response from the backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Connection refused, DNS failure, TLS error, and the like.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend did not answer within the configured timeout.
    #[error("backend timed out")]
    Timeout,

    /// The backend answered but its body could not be read.
    #[error("backend response unreadable: {0}")]
    Body(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unavailable(_) | Self::Body(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Unavailable(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Join the backend base URL with the request path and query.
pub fn backend_endpoint(base: &str, path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}{path}?{q}"),
        None => format!("{base}{path}"),
    }
}

/// Forward the request as-is to the same path on the backend.
pub async fn forward(
    State(state): State<HostState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = backend_endpoint(&state.backend_url, uri.path(), uri.query());
    match send(&state, method.clone(), &url, &headers, body).await {
        Ok(response) => Ok(response),
        Err(e) => {
            tracing::error!(error = %e, %method, path = uri.path(), "backend forward failed");
            Err(e)
        }
    }
}

/// Fallback for unmatched paths: GET/HEAD go to the backend (generated
/// images and other backend-served files), everything else is a 404.
pub async fn forward_fallback(
    state: State<HostState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }
    forward(state, method, uri, headers, body).await.into_response()
}

async fn send(state: &HostState, method: Method, url: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    let mut request = state.http.request(method, url);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut response = (status, bytes).into_response();
    response.headers_mut().remove(CONTENT_TYPE);
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
