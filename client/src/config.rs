//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read process environment at runtime, so the API
//! origin is baked in at compile time via `FLAGSCAN_API_BASE`. Leaving it
//! unset keeps every request same-origin, which is how the host binary's
//! `/api` proxy expects to be used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Compile-time override for the API origin (e.g. `http://localhost:5000`).
pub const API_BASE_ENV: &str = "FLAGSCAN_API_BASE";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin prepended to every API path. Empty means same-origin.
    pub api_base: String,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim().trim_end_matches('/').to_owned();
        Self { api_base }
    }

    /// Config captured from `FLAGSCAN_API_BASE` when the crate was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("FLAGSCAN_API_BASE").unwrap_or_default())
    }

    /// Absolute (or same-origin relative) URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base)
        } else {
            format!("{}/{path}", self.api_base)
        }
    }
}
