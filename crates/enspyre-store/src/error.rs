//! Error types for enspyre-store

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for enspyre-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in enspyre-store
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid lead input
    #[error("Core error: {0}")]
    Core(#[from] enspyre_core::Error),

    /// Writing the lead collection back to storage failed; nothing was saved
    #[error("Failed to persist leads under '{key}': {source}")]
    Persistence {
        /// Storage key that could not be written
        key: String,
        /// Underlying substrate failure
        #[source]
        source: Box<Error>,
    },

    /// The stored blob is not a valid lead array
    #[error("Stored leads under '{key}' are unreadable: {source}")]
    Deserialization {
        /// Storage key that was read
        key: String,
        /// JSON parse failure
        #[source]
        source: serde_json::Error,
    },

    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A write would push the store past its quota
    #[error("Quota exceeded writing '{key}': {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Total bytes the store would hold after the write
        needed: usize,
        /// Configured limit in bytes
        quota: usize,
    },

    /// The store refuses writes
    #[error("Storage is read-only: {0}")]
    ReadOnly(String),

    /// The key cannot be mapped onto the substrate
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// Filesystem failure
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// The I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wraps a substrate failure as a persistence error for `key`.
    pub fn persistence<K: Into<String>>(key: K, source: Error) -> Self {
        Error::Persistence {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io_with_path<P: Into<PathBuf>>(source: std::io::Error, path: P) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if a mutation failed to read or write the substrate.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Persistence { .. })
    }

    /// Returns whether retrying the same call could succeed.
    ///
    /// I/O failures may be transient. A full quota, a read-only store and
    /// bad input stay that way until something else changes.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Persistence { source, .. } => source.is_retryable(),
            Error::Io { .. } => true,
            Error::Core(_) => false,
            Error::Deserialization { .. } => false,
            Error::Serialization(_) => false,
            Error::QuotaExceeded { .. } => false,
            Error::ReadOnly(_) => false,
            Error::InvalidKey(_) => false,
        }
    }
}
