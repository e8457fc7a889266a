//! Host configuration from environment variables.
//!
//! `main` loads `.env` through `dotenvy` first, so these can come from either
//! the process environment or a dotenv file.
//!
//! - `PORT`: listen port (default 3000)
//! - `API_UPSTREAM`: base URL of the back-end API `/api/*` is forwarded to
//! - `PROXY_TIMEOUT_SECS`: per-request timeout for forwarded calls

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM: &str = "http://localhost:5000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Scheme + authority, no trailing slash.
    pub api_upstream: String,
    pub proxy_timeout: Duration,
}

impl HostConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Unset and blank variables
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let api_upstream = match get("API_UPSTREAM") {
            Some(raw) => normalize_upstream(&raw)?,
            None => DEFAULT_API_UPSTREAM.to_owned(),
        };
        let timeout_secs = parse_or(get("PROXY_TIMEOUT_SECS"), "PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "PROXY_TIMEOUT_SECS", value: "0".into() });
        }

        Ok(Self { port, api_upstream, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

fn normalize_upstream(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::Invalid { var: "API_UPSTREAM", value: raw.to_owned() });
    }
    Ok(trimmed.to_owned())
}
