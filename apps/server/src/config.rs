use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

/// Upper bound on how much earlier than the HTTP timeout a lookup gives up.
const MAX_LOOKUP_MARGIN: Duration = Duration::from_secs(1);

pub struct Config {
    pub listen_addr: SocketAddr,
    pub inventory_path: PathBuf,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("LOOKOUT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid LOOKOUT_LISTEN_ADDR")?;
        let inventory_path = std::env::var("LOOKOUT_INVENTORY_PATH")
            .unwrap_or_else(|_| "./inventory.json".into())
            .into();
        let cors_allow = std::env::var("LOOKOUT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("LOOKOUT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            inventory_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Deadline for the lookups behind one request.
    ///
    /// Ends a tenth of the request timeout (at most one second) before the
    /// HTTP timeout, so an expired lookup still answers with its partial
    /// failures instead of a bare timeout response.
    pub fn lookup_timeout(&self) -> Duration {
        let margin = (self.request_timeout / 10).min(MAX_LOOKUP_MARGIN);
        self.request_timeout.saturating_sub(margin)
    }
}
