//! Error types for breach lookups and configuration.

use serde::Serialize;

/// Coarse classification of a failed breach lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    /// Timeout, connection refused, DNS, or other transport-level failure.
    NetworkFailure,
    /// Non-200 response, malformed body, or unparseable count.
    ServiceError,
}

/// Errors from the breach range service.
///
/// Carries the endpoint label (`GET /range/{prefix}`) but never the digest
/// suffix or the password.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum BreachError {
    #[error("request {endpoint} timed out")]
    Timeout { endpoint: String },
    #[error("transport error calling {endpoint}: {message}")]
    Transport { endpoint: String, message: String },
    #[error("{endpoint} returned {status}")]
    Status { endpoint: String, status: u16 },
    #[error("malformed record on line {line} of {endpoint} response")]
    MalformedRecord { endpoint: String, line: usize },
    #[error("unparseable count {count:?} in {endpoint} response")]
    InvalidCount { endpoint: String, count: String },
}

impl BreachError {
    pub fn kind(&self) -> FailureKind {
        match self {
            BreachError::Timeout { .. } | BreachError::Transport { .. } => {
                FailureKind::NetworkFailure
            }
            BreachError::Status { .. }
            | BreachError::MalformedRecord { .. }
            | BreachError::InvalidCount { .. } => FailureKind::ServiceError,
        }
    }

    pub(crate) fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BreachError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            // The URL is stripped so the message only names the endpoint label.
            BreachError::Transport {
                endpoint: endpoint.to_string(),
                message: err.without_url().to_string(),
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid value for {0}: {1:?}")]
    InvalidValue(String, String),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Errors constructing a [`crate::PasswordAuditor`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("blacklist error: {0}")]
    Blacklist(#[from] crate::blacklist::BlacklistError),
}
