//! Development reverse proxy for `/ui`.
//!
//! In dev mode the client is served by a hot-reloading dev server; this
//! forwards each request verbatim (path, query, method, headers, body) and
//! relays the upstream response.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{CONNECTION, HOST, TRANSFER_ENCODING};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            ProxyError::Body(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!(error = %self, "dev proxy request failed");
        (status, self.to_string()).into_response()
    }
}

#[derive(Clone, Debug)]
pub struct DevProxy {
    client: reqwest::Client,
    upstream: String,
}

impl DevProxy {
    pub fn new(upstream: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: upstream.trim_end_matches('/').to_owned(),
        }
    }

    /// Upstream URL for an incoming path-and-query.
    pub fn target(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.upstream)
    }
}

/// Drop headers that describe the hop rather than the message.
fn forwardable(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    for name in [HOST, CONNECTION, TRANSFER_ENCODING] {
        out.remove(name);
    }
    out
}

pub async fn forward(State(proxy): State<DevProxy>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = proxy.target(path);
    let body = to_bytes(body, MAX_BODY_BYTES).await?;

    tracing::debug!(method = %parts.method, %url, "proxying to dev upstream");
    let upstream = proxy
        .client
        .request(parts.method, &url)
        .headers(forwardable(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwardable(upstream.headers());
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
