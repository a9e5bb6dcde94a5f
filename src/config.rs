//! Server configuration from flags, environment, and `.env`.
//!
//! Every flag has an env fallback so the server can run under a process
//! supervisor without arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::error::ServeError;

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_DEV_UPSTREAM: &str = "http://localhost:3000";

#[derive(Parser, Debug, Clone)]
#[command(name = "o11y-ui", about = "Serve the O11y web UI under /ui")]
pub struct ServeConfig {
    /// Port to listen on.
    #[arg(long, env = "UI_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding the built client (trunk `dist`).
    #[arg(long, env = "UI_DIR", default_value = "dist")]
    pub dir: PathBuf,

    /// Proxy `/ui` to a running dev server instead of serving files.
    #[arg(long, env = "UI_DEV")]
    pub dev: bool,

    #[arg(long, env = "UI_DEV_UPSTREAM", default_value = DEFAULT_DEV_UPSTREAM)]
    pub dev_upstream: String,
}

impl ServeConfig {
    /// Check the settings the selected mode depends on.
    ///
    /// # Errors
    ///
    /// `MissingAssets` when serving files from a directory that does not
    /// exist; `InvalidUpstream` when the dev upstream is not an http(s) URL.
    pub fn validate(&self) -> Result<(), ServeError> {
        if self.dev {
            let url = reqwest::Url::parse(&self.dev_upstream).map_err(|e| ServeError::InvalidUpstream {
                url: self.dev_upstream.clone(),
                reason: e.to_string(),
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ServeError::InvalidUpstream {
                    url: self.dev_upstream.clone(),
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
            return Ok(());
        }
        if !self.dir.is_dir() {
            return Err(ServeError::MissingAssets(self.dir.clone()));
        }
        Ok(())
    }

    /// Upstream base with any trailing slash removed.
    pub fn upstream_base(&self) -> &str {
        self.dev_upstream.trim_end_matches('/')
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
