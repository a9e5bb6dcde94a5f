//! HTTP request metrics in Prometheus text exposition format.
//!
//! SYSTEM CONTEXT
//! ==============
//! One process-wide recorder, installed on first use. Every request through
//! the router bumps `http_requests_total{method, path, status}` and records
//! `http_request_duration_seconds{method, path}`. `GET /metrics` renders both.

use std::sync::OnceLock;
use std::time::Instant;

use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::routes::UI_PREFIX;

const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Handle to the global recorder, installing it on first call.
pub fn handle() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if ::metrics::set_global_recorder(recorder).is_err() {
                tracing::warn!("metrics recorder already installed; /metrics will be empty");
            }
            handle
        })
        .clone()
}

/// Collapse a request path to a bounded label set.
///
/// Everything under the UI mount shares one label so asset names and deep
/// links do not explode cardinality.
pub fn path_label(path: &str) -> &'static str {
    match path {
        "/" => "/",
        "/healthz" => "/healthz",
        "/metrics" => "/metrics",
        p if p == UI_PREFIX || p.starts_with("/ui/") => UI_PREFIX,
        _ => "other",
    }
}

pub async fn track_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = path_label(request.uri().path());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();
    ::metrics::counter!("http_requests_total", "method" => method.clone(), "path" => path, "status" => status)
        .increment(1);
    ::metrics::histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(elapsed);

    response
}

pub async fn render(handle: PrometheusHandle) -> impl IntoResponse {
    ([(CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], handle.render())
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
