//! Error taxonomy for the ACI client.
//!
//! Every failure surfaced by the client is an [`AciError`]. HTTP status
//! outcomes map onto a fixed set of variants; transport and decoding failures
//! keep their original error as the source.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type AciResult<T> = Result<T, AciError>;

/// Errors returned by the ACI client.
#[derive(Debug, Error)]
pub enum AciError {
    /// Missing credential or unusable endpoint at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed caller input (no status) or a 400 response.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        status_code: Option<u16>,
        body: Option<String>,
    },

    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        status_code: u16,
        body: String,
    },

    #[error("Permission error: {message}")]
    Permission {
        message: String,
        status_code: u16,
        body: String,
    },

    #[error("Not found: {message}")]
    NotFound {
        message: String,
        status_code: u16,
        body: String,
    },

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        status_code: u16,
        body: String,
    },

    #[error("Server error: {message}")]
    Server {
        message: String,
        status_code: u16,
        body: String,
    },

    /// Any status the service is not expected to return.
    #[error("{message}")]
    Unknown {
        message: String,
        status_code: u16,
        body: String,
    },

    /// Network-level failure, surfaced unchanged after retries.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the declared result type.
    #[error("Failed to decode response: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl AciError {
    /// Local validation failure for a single parameter.
    pub fn invalid_field(field: &str, reason: impl std::fmt::Display) -> Self {
        AciError::Validation {
            message: format!("{field}: {reason}"),
            status_code: None,
            body: None,
        }
    }

    /// Local validation failure that is not tied to one parameter.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AciError::Validation {
            message: message.into(),
            status_code: None,
            body: None,
        }
    }

    /// HTTP status code carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AciError::Validation { status_code, .. } => *status_code,
            AciError::Authentication { status_code, .. }
            | AciError::Permission { status_code, .. }
            | AciError::NotFound { status_code, .. }
            | AciError::RateLimit { status_code, .. }
            | AciError::Server { status_code, .. }
            | AciError::Unknown { status_code, .. } => Some(*status_code),
            AciError::Transport(e) => e.status().map(|s| s.as_u16()),
            AciError::Configuration(_) | AciError::Deserialize(_) => None,
        }
    }

    /// Raw response body carried by the error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            AciError::Validation { body, .. } => body.as_deref(),
            AciError::Authentication { body, .. }
            | AciError::Permission { body, .. }
            | AciError::NotFound { body, .. }
            | AciError::RateLimit { body, .. }
            | AciError::Server { body, .. }
            | AciError::Unknown { body, .. } => Some(body),
            AciError::Configuration(_) | AciError::Transport(_) | AciError::Deserialize(_) => None,
        }
    }

    /// Whether the retry policy should attempt the call again.
    ///
    /// Only throttling, server-side and unclassified statuses, plus
    /// network-level failures, are retried. Everything else is deterministic.
    pub fn is_retryable(&self) -> bool {
        match self {
            AciError::RateLimit { .. } | AciError::Server { .. } | AciError::Unknown { .. } => true,
            AciError::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            AciError::Configuration(_)
            | AciError::Validation { .. }
            | AciError::Authentication { .. }
            | AciError::Permission { .. }
            | AciError::NotFound { .. }
            | AciError::Deserialize(_) => false,
        }
    }
}
