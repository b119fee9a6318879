//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Nothing here is consulted per request.
//!
//! ## Redis connection
//!
//! Either a full URL:
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! ```
//!
//! or individual components:
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! ## Optional Variables
//!
//! - `REDIS_KEY_PREFIX` - Prepended to the request path to form the Redis key (default: empty)
//! - `REDIRECT_STATUS_CODE` - 301, 302, 303, 307 or 308; empty or `0` means 302 (default: 302)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::domain::RedirectStatus;
use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: String,
    /// Namespace for lookup keys; empty means the path is the key.
    pub redis_key_prefix: String,
    pub redirect_status: RedirectStatus,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if no Redis connection is configured or
    /// `REDIRECT_STATUS_CODE` is not a redirect status.
    pub fn from_env() -> Result<Self> {
        let redis_url = Self::load_redis_url()
            .context("REDIS_URL or REDIS_HOST must be set to locate the redirect store")?;

        let redis_key_prefix = env::var("REDIS_KEY_PREFIX").unwrap_or_default();

        let redirect_status = Self::load_redirect_status()?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            redis_url,
            redis_key_prefix,
            redirect_status,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        // Empty password means no authentication
        let url = match env::var("REDIS_PASSWORD") {
            Ok(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Reads `REDIRECT_STATUS_CODE`. Unset, blank and `0` all mean 302.
    fn load_redirect_status() -> Result<RedirectStatus> {
        let raw = match env::var("REDIRECT_STATUS_CODE") {
            Ok(v) if !v.trim().is_empty() => Some(
                v.trim()
                    .parse::<u16>()
                    .with_context(|| format!("REDIRECT_STATUS_CODE must be a number, got '{}'", v))?,
            ),
            _ => None,
        };

        RedirectStatus::from_config(raw).context("Invalid REDIRECT_STATUS_CODE")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - `redis_url` does not use a `redis://` or `rediss://` scheme
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.redis_url.starts_with("redis://") && !self.redis_url.starts_with("rediss://") {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(&self.redis_url)
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Redis: {}", mask_connection_string(&self.redis_url));
        if !self.redis_key_prefix.is_empty() {
            tracing::info!("  Redis key prefix: {}", self.redis_key_prefix);
        }
        tracing::info!("  Redirect status: {}", self.redirect_status);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Replaces the password in a connection URL with `***`.
///
/// Strings that do not parse as URLs are returned unchanged.
fn mask_connection_string(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.password().is_some() => {
            if url.set_password(Some("***")).is_ok() {
                url.to_string()
            } else {
                raw.to_string()
            }
        }
        _ => raw.to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
