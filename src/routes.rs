//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a single-page app mounted at `/ui`. Unknown paths under
//! `/ui` fall back to `index.html` so client-side routes can be deep-linked.
//! `/` redirects into the app. Every route is counted by the request
//! metrics middleware and exposed at `/metrics`.

use axum::Router;
use axum::middleware;
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::IntoResponse;
use axum::routing::{any, get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServeConfig;
use crate::metrics;
use crate::proxy::{self, DevProxy};

pub const UI_PREFIX: &str = "/ui";

pub fn app(config: &ServeConfig) -> Router {
    let ui = if config.dev {
        ui_proxy_routes(DevProxy::new(config.upstream_base()))
    } else {
        ui_static_routes(config)
    };

    let handle = metrics::handle();
    Router::new()
        .route("/", get(redirect_root))
        .route("/healthz", get(healthz))
        .route("/metrics", get(move || metrics::render(handle.clone())))
        .merge(ui)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(TraceLayer::new_for_http())
}

fn ui_static_routes(config: &ServeConfig) -> Router {
    let index = ServeFile::new(config.dir.join("index.html"));
    let assets = ServeDir::new(&config.dir)
        .append_index_html_on_directories(true)
        .fallback(index);
    Router::new().nest_service(UI_PREFIX, assets)
}

fn ui_proxy_routes(proxy: DevProxy) -> Router {
    Router::new()
        .route(UI_PREFIX, any(proxy::forward))
        .route("/ui/", any(proxy::forward))
        .route("/ui/{*path}", any(proxy::forward))
        .with_state(proxy)
}

async fn redirect_root() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, UI_PREFIX)])
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
