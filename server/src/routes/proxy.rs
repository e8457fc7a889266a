//! `/api/*` reverse proxy to the back-end API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks only to this host, so the API's session cookie is
//! first-party and `credentials: include` requests need no CORS. Requests
//! and responses are buffered; headers are copied minus the hop-by-hop set.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::body::Body;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::{CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Largest request body forwarded upstream. Flag photos fit well within it.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const FORWARDED_FOR: &str = "x-forwarded-for";

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("failed to build proxy client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request body too large")]
    BodyTooLarge,
    #[error("API server unavailable")]
    Upstream(#[source] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Client(_) | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Shared HTTP client plus the upstream base URL.
#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    upstream: Arc<str>,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(upstream: &str, timeout: Duration) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ProxyError::Client)?;
        Ok(Self { http, upstream: Arc::from(upstream.trim_end_matches('/')) })
    }
}

/// Upstream URL for an incoming path (with its query string).
pub(crate) fn upstream_url(upstream: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", upstream.trim_end_matches('/'))
}

/// Whether a header is copied across the proxy in either direction.
///
/// `Host` and `Content-Length` are dropped too: both are recomputed for the
/// outgoing message.
pub(crate) fn forwardable(name: &HeaderName) -> bool {
    name != HOST && name != CONTENT_LENGTH && !HOP_BY_HOP.contains(&name.as_str())
}

fn filter_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if forwardable(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: replay the request upstream and relay the answer.
pub async fn forward(
    State(state): State<ProxyState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    req: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.upstream, path);

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| ProxyError::BodyTooLarge)?;

    let mut headers = filter_headers(&parts.headers);
    if let Ok(value) = HeaderValue::from_str(&peer.ip().to_string()) {
        headers.append(HeaderName::from_static(FORWARDED_FOR), value);
    }

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, %url, "upstream request failed");
            ProxyError::Upstream(e)
        })?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(ProxyError::Upstream)?;
    tracing::debug!(method = %parts.method, %url, %status, bytes = bytes.len(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
