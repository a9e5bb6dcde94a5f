mod config;
mod error;
mod metrics;
mod proxy;
mod routes;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::ServeConfig;
use crate::error::ServeError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServeConfig::parse();
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "o11y-ui stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServeConfig) -> Result<(), ServeError> {
    config.validate()?;
    let app = routes::app(&config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind { addr: addr.clone(), source })?;

    if config.dev {
        tracing::info!(port = config.port, upstream = %config.dev_upstream, "o11y-ui listening (dev proxy)");
    } else {
        tracing::info!(port = config.port, dir = %config.dir.display(), "o11y-ui listening");
    }
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
