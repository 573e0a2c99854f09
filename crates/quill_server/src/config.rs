//! Server configuration.
//!
//! Host, port, database path and logging settings, with environment
//! variable overrides for deployments.

use quill_core::default_log_level;

const ENV_HOST: &str = "QUILL_HOST";
const ENV_PORT: &str = "QUILL_PORT";
const ENV_DB: &str = "QUILL_DB";
const ENV_LOG_LEVEL: &str = "QUILL_LOG_LEVEL";
const ENV_LOG_DIR: &str = "QUILL_LOG_DIR";

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1").
    pub host: String,
    /// Port to bind to (default: 3000).
    pub port: u16,
    /// SQLite database file, created if missing (default: "quill.sqlite").
    pub database_path: String,
    /// Log level passed to the core logging bootstrap.
    pub log_level: String,
    /// Log directory; logs go to stderr when unset.
    pub log_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_path: "quill.sqlite".to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Builds a config from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var(ENV_HOST).unwrap_or(defaults.host),
            port: std::env::var(ENV_PORT)
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.port),
            database_path: std::env::var(ENV_DB).unwrap_or(defaults.database_path),
            log_level: std::env::var(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: std::env::var(ENV_LOG_DIR).ok(),
        }
    }

    /// The socket address string to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
