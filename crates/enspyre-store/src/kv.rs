//! Whole-value key-value substrate.

use crate::Result;

/// Synchronous key-value storage holding whole string values.
///
/// Modelled on the browser's `localStorage`: values are read and replaced
/// as a whole, there are no partial updates and no transactions. A `set`
/// either stores the complete new value or fails and leaves the old one.
pub trait KeyValueStore {
    /// Reads the value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Backend name for diagnostics.
    fn name(&self) -> &str;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
