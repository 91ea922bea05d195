//! Unique identifier type for leads.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a lead.
///
/// Freshly issued ids are UUID v4 strings. Stored ids are kept as opaque
/// strings so records written by other clients of the same key still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    /// Issues a new random lead ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use enspyre_core::LeadId;
    ///
    /// let a = LeadId::new();
    /// let b = LeadId::new();
    /// assert_ne!(a, b);
    /// assert!(!a.as_str().is_empty());
    /// ```
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier string.
    pub fn from_string<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the lead ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LeadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LeadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LeadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Uuid> for LeadId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl AsRef<str> for LeadId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
