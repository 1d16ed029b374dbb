use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application title (default: "Stockroom")
    pub app_title: String,
    /// Application version (default: crate version)
    pub version: String,
    /// Path to SQLite database file (default: "stockroom.db")
    pub sqlite_path: String,
    /// Default log level when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `APP_TITLE` - Application title (default: "Stockroom")
    /// - `VERSION` - Application version (default: crate version)
    /// - `SQLITE_PATH` - SQLite database path (default: "stockroom.db")
    /// - `LOG_LEVEL` - Default log level (default: "info")
    pub fn from_env() -> Self {
        Self {
            app_title: env::var("APP_TITLE").unwrap_or_else(|_| "Stockroom".to_string()),
            version: env::var("VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "stockroom.db".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
