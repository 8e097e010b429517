//! Same-origin forwarding of `/api/*` to the upstream API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls `/api/auth/me`, `/api/auth/logout`, and
//! `/api/bots` on its own origin so session cookies stay first-party. This
//! module relays those requests to `API_UPSTREAM_URL` and copies the response
//! back, minus hop-by-hop headers.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request bodies larger than this are rejected before forwarding.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("failed to build upstream client: {0}")]
    Client(reqwest::Error),
    #[error("request body unreadable: {0}")]
    Body(axum::Error),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream response invalid: {0}")]
    Response(#[from] axum::http::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Client(_) | Self::Upstream(_) | Self::Response(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// HTTP client bound to one upstream base URL.
#[derive(Clone)]
pub struct Upstream {
    base_url: String,
    client: reqwest::Client,
}

impl Upstream {
    /// # Errors
    ///
    /// Returns [`ProxyError::Client`] if the TLS backend cannot be initialized.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ProxyError::Client)?;
        Ok(Self { base_url, client })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Relay one request and return the upstream response as-is.
    ///
    /// # Errors
    ///
    /// Returns a [`ProxyError`] if the body cannot be read, the upstream is
    /// unreachable, or its response cannot be rebuilt.
    pub async fn forward(&self, req: Request) -> Result<Response, ProxyError> {
        let (parts, body) = req.into_parts();
        let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
        let url = upstream_url(&self.base_url, path_and_query);
        let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(ProxyError::Body)?;

        let resp = self
            .client
            .request(parts.method, url)
            .headers(forwardable_headers(&parts.headers))
            .body(bytes)
            .send()
            .await?;

        let status = resp.status();
        let headers = forwardable_headers(resp.headers());
        let body = resp.bytes().await?;

        let mut builder = axum::http::Response::builder().status(status);
        if let Some(out) = builder.headers_mut() {
            out.extend(headers);
        }
        Ok(builder.body(Body::from(body))?)
    }
}

/// `ANY /api/{*path}`
pub async fn forward(State(state): State<AppState>, req: Request) -> Response {
    let Some(upstream) = state.upstream.as_ref() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "API upstream not configured").into_response();
    };

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    match upstream.forward(req).await {
        Ok(resp) => {
            tracing::debug!(%method, %path, status = resp.status().as_u16(), "proxied");
            resp
        }
        Err(e) => {
            tracing::warn!(%method, %path, error = %e, "api proxy failed");
            e.into_response()
        }
    }
}

/// Join the upstream base with the incoming path and query.
#[must_use]
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path_and_query)
}

/// Headers that describe one connection rather than the message.
#[must_use]
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "host"
            | "content-length"
            | "transfer-encoding"
            | "te"
            | "trailer"
            | "upgrade"
            | "keep-alive"
            | "proxy-authorization"
            | "proxy-authenticate"
    )
}

/// Copy of `headers` without hop-by-hop entries. Repeated headers such as
/// `set-cookie` are kept.
#[must_use]
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}
