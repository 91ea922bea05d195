//! Relay client configuration.

use serde::{Deserialize, Serialize};

/// Form relay endpoint the contact form posts to.
pub const DEFAULT_RELAY_URL: &str = "https://formspree.io/f/enspyre-contact";

/// Contact relay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Relay URL receiving the JSON POST.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_RELAY_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ContactConfig {
    /// Config pointing at `endpoint` with default timeout.
    pub fn with_endpoint<S: Into<String>>(endpoint: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}
