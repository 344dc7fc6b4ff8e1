use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
}

impl Config {
    /// Reads the `BB_*` variables, after loading a `.env` file if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = lookup("BB_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .context("Invalid BB_LISTEN_ADDR")?;
        let db_path = lookup("BB_DB_PATH").unwrap_or_else(|| "./db/app.db".into());
        let cors_allow = lookup("BB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("BB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = lookup("BB_STATIC_DIR").unwrap_or_else(|| "public".into());
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
        })
    }
}
