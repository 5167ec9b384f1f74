//! Error type for item store calls.

use thiserror::Error;

/// A failed call against the item store endpoint.
///
/// Callers treat every variant the same way: one opaque failure, surfaced to
/// the user and never retried.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Base URL could not be parsed
    #[error("Invalid store URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request never got a response
    #[error("Request to item store failed: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("Item store returned HTTP {status}")]
    Status { status: u16 },

    /// Response body was not a valid item list
    #[error("Failed to decode item list: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl StoreError {
    /// Short form for notifications.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::InvalidUrl { .. } => "store URL is invalid".to_string(),
            StoreError::Network { .. } => "server unreachable".to_string(),
            StoreError::Status { status } => format!("server returned {}", status),
            StoreError::Decode { .. } => "unexpected response".to_string(),
        }
    }

    /// Stable identifier for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::InvalidUrl { .. } => "invalid_url",
            StoreError::Network { .. } => "network",
            StoreError::Status { .. } => "status",
            StoreError::Decode { .. } => "decode",
        }
    }
}
