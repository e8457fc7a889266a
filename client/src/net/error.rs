//! Failure taxonomy for API calls.
//!
//! DESIGN
//! ======
//! A non-2xx response is always "operation failed"; the server's `error`
//! field, when present, becomes the user-facing message. `Display` on
//! [`ApiError`] is therefore safe to render inline in forms.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (fetch threw, body could not be built).
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Browser-only call attempted while rendering on the server.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for rejections, `None` for every other kind.
    #[cfg(test)]
    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Build a [`ApiError::Rejected`] from a raw error body.
///
/// Uses the body's `error` field when it parses and is non-blank, otherwise
/// `fallback`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn rejection(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Rejected { status, message }
}

/// Fallback message for calls without an operation-specific wording.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn request_failed_message(status: u16) -> String {
    format!("Request failed ({status})")
}
