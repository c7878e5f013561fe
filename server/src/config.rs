//! Configuration management for the Event Space server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! `DATABASE_URL` is the only required variable.

use event_space_postgres::PostgresConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be used.
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Longest accepted keep-alive interval, one day.
pub const MAX_KEEPALIVE_INTERVAL_SECS: u64 = 86_400;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// `PostgreSQL` configuration
    pub postgres: PostgresConfig,
    /// HTTP listener configuration
    pub server: ServerConfig,
    /// Periodic self-ping, disabled when `None`
    pub keep_alive: Option<KeepAliveConfig>,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, ready for `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Keep-alive ping configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeepAliveConfig {
    /// URL fetched on every tick
    pub url: String,
    /// Seconds between pings
    pub interval_secs: u64,
}

impl KeepAliveConfig {
    /// Interval between pings.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Missing` if `DATABASE_URL` is unset
    /// - `ConfigError::Invalid` if a numeric variable does not parse or the
    ///   keep-alive interval is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let postgres = PostgresConfig {
            url,
            max_connections: parse_or(&get, "DATABASE_MAX_CONNECTIONS", 10)?,
            connect_timeout: parse_or(&get, "DATABASE_CONNECT_TIMEOUT", 30)?,
        };

        let server = ServerConfig {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&get, "PORT", 5000)?,
        };

        let keep_alive = match get("KEEPALIVE_URL") {
            Some(url) => {
                let interval_secs = parse_or(&get, "KEEPALIVE_INTERVAL_SECS", 900)?;
                if !(1..=MAX_KEEPALIVE_INTERVAL_SECS).contains(&interval_secs) {
                    return Err(ConfigError::Invalid {
                        var: "KEEPALIVE_INTERVAL_SECS",
                        value: interval_secs.to_string(),
                        reason: format!(
                            "interval must be between 1 and {MAX_KEEPALIVE_INTERVAL_SECS} seconds"
                        ),
                    });
                }
                Some(KeepAliveConfig { url, interval_secs })
            }
            None => None,
        };

        Ok(Self {
            postgres,
            server,
            keep_alive,
        })
    }
}

/// Sort the result of loading a `.env` file.
///
/// A missing file is normal and becomes `Ok(None)`. Any other failure, such
/// as a line that does not parse, is returned so the caller can report it.
///
/// # Errors
///
/// Returns the `dotenvy` error unless it is "file not found".
pub fn env_file(result: dotenvy::Result<PathBuf>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(error) if error.not_found() => Ok(None),
        Err(error) => Err(error),
    }
}

fn parse_or<T, F>(get: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            }),
        },
        None => Ok(default),
    }
}
