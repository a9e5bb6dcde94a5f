//! Startup and serve errors for the UI server.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("asset directory {} not found; build the client with trunk first", .0.display())]
    MissingAssets(PathBuf),
    #[error("invalid dev upstream URL '{url}': {reason}")]
    InvalidUpstream { url: String, reason: String },
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
