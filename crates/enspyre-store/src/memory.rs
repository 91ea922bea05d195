//! In-memory key-value store.

use std::collections::HashMap;

use crate::kv::KeyValueStore;
use crate::{Error, Result};

/// Key-value store held in process memory.
///
/// An optional quota caps the total bytes of keys plus values, the way a
/// browser caps `localStorage`. A `set` that would exceed it fails with
/// [`Error::QuotaExceeded`] and leaves the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store without a quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store limited to `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Bytes currently held (keys plus values).
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Configured quota, if any.
    pub fn quota(&self) -> Option<usize> {
        self.quota
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let replaced = self.entries.get(key).map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > quota {
                tracing::warn!(key, needed, quota, "memory store quota exceeded");
                return Err(Error::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
        assert!(store.is_empty());
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn test_used_bytes() {
        let mut store = MemoryStore::new();
        store.set("ab", "cde").unwrap();
        store.set("f", "").unwrap();
        assert_eq!(store.used_bytes(), 6);
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let mut store = MemoryStore::with_quota(10);
        store.set("k", "12345").unwrap();

        let err = store.set("k", "1234567890").unwrap_err();
        let Error::QuotaExceeded { needed, quota, .. } = err else {
            unreachable!("Expected QuotaExceeded");
        };
        assert_eq!(needed, 11);
        assert_eq!(quota, 10);

        assert_eq!(store.get("k").unwrap().as_deref(), Some("12345"));
    }

    #[test]
    fn test_quota_counts_replacement_not_accumulation() {
        let mut store = MemoryStore::with_quota(10);
        for _ in 0..5 {
            store.set("k", "123456789").unwrap();
        }
        assert_eq!(store.used_bytes(), 10);
        assert_eq!(store.quota(), Some(10));
    }

    #[test]
    fn test_quota_counts_other_keys() {
        let mut store = MemoryStore::with_quota(10);
        store.set("a", "1234").unwrap();
        assert!(store.set("b", "12345").is_err());
        assert!(store.set("b", "1234").is_ok());
    }
}
