//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Database location
//!
//! ```bash
//! # Full URL
//! export DATABASE_URL="sqlite://courses.db"
//!
//! # Or just a file path
//! export DB_PATH="/var/lib/courses/courses.db"
//! ```
//!
//! `DATABASE_URL` wins over `DB_PATH`. With neither set the service uses
//! `sqlite://courses.db` in the working directory. The file is created if
//! missing.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `DB_IDLE_TIMEOUT` - Idle connection lifetime in seconds (default: 600)
//! - `DB_MAX_LIFETIME` - Maximum connection lifetime in seconds (default: 1800)

use anyhow::{Context, Result};
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://courses.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT", 30)?;
        let db_idle_timeout = parse_var("DB_IDLE_TIMEOUT", 600)?;
        let db_max_lifetime = parse_var("DB_MAX_LIFETIME", 1800)?;

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
            db_idle_timeout,
            db_max_lifetime,
        })
    }

    /// Resolves the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `DB_PATH`
    /// 3. [`DEFAULT_DATABASE_URL`]
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        if let Ok(path) = env::var("DB_PATH") {
            return format!("sqlite://{}", path);
        }

        DEFAULT_DATABASE_URL.to_string()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - a pool setting is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Pool size: {}", self.db_max_connections);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            database_url: "sqlite://courses.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
            db_idle_timeout: 600,
            db_max_lifetime: 1800,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_database_url_from_path() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::set_var("DB_PATH", "/tmp/courses-test.db");
        }

        assert_eq!(
            Config::load_database_url(),
            "sqlite:///tmp/courses-test.db"
        );

        unsafe {
            env::remove_var("DB_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_database_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://from-url.db");
            env::set_var("DB_PATH", "from-path.db");
        }

        let url = Config::load_database_url();

        assert!(url.contains("from-url"));
        assert!(!url.contains("from-path"));

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DB_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_database_url_default() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DB_PATH");
        }

        assert_eq!(Config::load_database_url(), DEFAULT_DATABASE_URL);
    }

    #[test]
    #[serial]
    fn test_invalid_number_is_an_error() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DB_MAX_CONNECTIONS", "lots");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("DB_MAX_CONNECTIONS");
        }
    }
}
