// ABOUTME: Configuration loading for the blogd server.
// ABOUTME: Reads environment variables with defaults for the bind address and database path.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BLOGD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BlogdConfig {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
}

impl BlogdConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - BLOGD_BIND: socket address to bind (default: 127.0.0.1:3000)
    /// - BLOGD_DB: path to the SQLite file (default: blog.db)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_str = std::env::var("BLOGD_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let db_path = std::env::var("BLOGD_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("blog.db"));

        Ok(Self { bind, db_path })
    }
}
