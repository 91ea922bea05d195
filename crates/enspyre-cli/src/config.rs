//! Configuration file for the `enspyre` binary.
//!
//! ```toml
//! [storage]
//! backend = "file"
//! data_dir = "~/.local/share/enspyre"
//! key = "enspyre_leads"
//!
//! [contact]
//! endpoint = "https://formspree.io/f/enspyre-contact"
//! timeout_secs = 10
//!
//! [logging]
//! level = "warn"
//! ```

use enspyre_contact::ContactConfig;
use enspyre_store::StorageConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnspyreConfig {
    /// Lead storage.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Contact relay.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl EnspyreConfig {
    /// Project name used for the config directory.
    pub const PROJECT_NAME: &'static str = "enspyre";

    /// `<config_dir>/enspyre/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path if given, else [`Self::default_config_path`].
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads configuration.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(Path::new(path)),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    tracing::debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parses the TOML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EnspyreConfig::default();
        assert_eq!(config.storage.key, "enspyre_leads");
        assert_eq!(config.contact.timeout_secs, 10);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndata_dir = \"/srv/leads\"\n").unwrap();

        let config = EnspyreConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.storage.data_dir.as_deref(), Some("/srv/leads"));
        assert_eq!(config.storage.backend, "file");
        assert_eq!(config.contact, ContactConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = EnspyreConfig::load(Some("/nonexistent/enspyre.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\n").unwrap();

        let err = EnspyreConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = EnspyreConfig::default();
        config.contact.endpoint = "http://localhost:9000/relay".to_string();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[storage]"));
        assert!(text.contains("[contact]"));

        let back: EnspyreConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_resolve_config_path_explicit() {
        let path = EnspyreConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }
}
