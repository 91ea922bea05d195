//! Error types for enspyre-cli

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for enspyre-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in enspyre-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from enspyre-core
    #[error(transparent)]
    Core(#[from] enspyre_core::Error),

    /// Error from enspyre-store
    #[error(transparent)]
    Store(#[from] enspyre_store::Error),

    /// Error from enspyre-contact
    #[error(transparent)]
    Contact(#[from] enspyre_contact::Error),

    /// Configuration file problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// No lead with the requested id
    #[error("Lead not found: {0}")]
    LeadNotFound(String),

    /// Filesystem failure
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path involved
        path: PathBuf,
        /// The I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON output encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing command output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io_with_path<P: Into<PathBuf>>(source: std::io::Error, path: P) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
