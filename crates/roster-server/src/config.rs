// ABOUTME: Configuration loading and validation for the roster server.
// ABOUTME: Reads ROSTER_* environment variables and falls back to the historical defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ROSTER_BIND is not a valid socket address: {0}")]
    InvalidBind(String),

    #[error("ROSTER_BUSY_TIMEOUT_MS is not a whole number of milliseconds: {0}")]
    InvalidBusyTimeout(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub db_path: PathBuf,
    pub bind: SocketAddr,
    pub busy_timeout: Duration,
}

impl RosterConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - ROSTER_DB_PATH: SQLite file, recreated on every start (default: sqlite-database.db)
    /// - ROSTER_BIND: socket address to bind (default: 127.0.0.1:8080)
    /// - ROSTER_BUSY_TIMEOUT_MS: how long a request waits on a locked database (default: 5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RosterConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("ROSTER_DB_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("sqlite-database.db"));

        let bind_str = lookup("ROSTER_BIND").unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let busy_timeout = match lookup("ROSTER_BUSY_TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidBusyTimeout(raw))?,
            None => roster_store::DEFAULT_BUSY_TIMEOUT,
        };

        Ok(Self {
            db_path,
            bind,
            busy_timeout,
        })
    }
}
