//! Error types for enspyre-contact

use thiserror::Error;

/// Result type alias for enspyre-contact operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in enspyre-contact
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid message input
    #[error("Core error: {0}")]
    Core(#[from] enspyre_core::Error),

    /// The relay did not accept the submission
    #[error("Relay error: {message}")]
    Relay {
        /// HTTP status, when a response came back
        status: Option<u16>,
        /// What went wrong
        message: String,
    },

    /// The relay URL is malformed
    #[error("Invalid relay endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The configured endpoint
        endpoint: String,
        /// Parse failure
        message: String,
    },

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Creates a relay error for a non-2xx response.
    pub fn rejected(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("relay responded with HTTP {status}")
        } else {
            format!("relay responded with HTTP {status}: {body}")
        };
        Error::Relay {
            status: Some(status),
            message,
        }
    }

    /// Creates a relay error for a request that got no response.
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Error::Relay {
            status: None,
            message: message.into(),
        }
    }

    /// Returns `true` for any failed submission, whatever the cause.
    pub fn is_relay_failure(&self) -> bool {
        matches!(self, Error::Relay { .. })
    }

    /// Returns `true` if a later resubmission could succeed: no response,
    /// a 5xx, or 429. The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Relay { status: None, .. } => true,
            Error::Relay {
                status: Some(code), ..
            } => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}
