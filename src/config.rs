//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string
    pub database_url: Option<String>,
    /// Serve from the volatile in-memory store instead of Postgres
    pub in_memory: bool,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - Postgres connection string (default: unset)
    /// - `BIZTIME_IN_MEMORY` - `1` or `true` to run without Postgres (default: false)
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            in_memory: env::var("BIZTIME_IN_MEMORY")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            in_memory: false,
            max_connections: 5,
            server_port: 3000,
        }
    }
}
