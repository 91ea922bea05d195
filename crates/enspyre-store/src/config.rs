//! Storage configuration and backend factory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::file::FileStore;
use crate::kv::KeyValueStore;
use crate::lead_store::LEADS_STORAGE_KEY;
use crate::memory::MemoryStore;
use crate::{Error, Result};

/// Where and how the lead collection is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend type: "file" or "memory".
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Directory for the file backend. `~` is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    /// Key the lead array is stored under.
    #[serde(default = "default_key")]
    pub key: String,

    /// Byte quota for the memory backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<usize>,

    /// Refuse all writes (file backend).
    #[serde(default)]
    pub read_only: bool,
}

fn default_backend() -> String {
    "file".to_string()
}

fn default_key() -> String {
    LEADS_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: None,
            key: default_key(),
            quota_bytes: None,
            read_only: false,
        }
    }
}

impl StorageConfig {
    /// Data directory for the file backend.
    ///
    /// Uses `data_dir` with `~` expanded, else the platform data directory
    /// joined with `enspyre`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when no directory is configured and the
    /// platform has no data directory.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(PathBuf::from(shellexpand::tilde(dir).as_ref()));
        }
        dirs::data_dir()
            .map(|base| base.join("enspyre"))
            .ok_or_else(|| {
                Error::io_with_path(
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "no platform data directory; set storage.data_dir",
                    ),
                    "",
                )
            })
    }

    /// Opens the configured backend.
    ///
    /// Unknown backend names fall back to the file backend with a warning.
    pub fn open(&self) -> Result<Box<dyn KeyValueStore>> {
        match self.backend.as_str() {
            "memory" => {
                let store = match self.quota_bytes {
                    Some(quota) => MemoryStore::with_quota(quota),
                    None => MemoryStore::new(),
                };
                Ok(Box::new(store))
            }
            other => {
                if other != "file" {
                    tracing::warn!(backend = other, "unknown storage backend, using file");
                }
                let dir = self.resolved_data_dir()?;
                tracing::debug!(dir = %dir.display(), "opening file store");
                Ok(Box::new(FileStore::new(dir).read_only(self.read_only)))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
