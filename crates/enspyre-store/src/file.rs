//! Filesystem key-value store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;
use crate::{Error, Result};

/// Key-value store keeping each key in `<dir>/<key>.json`.
///
/// `set` writes a hidden sibling file and renames it over the target, so
/// readers see either the old value or the new one. The directory is
/// created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    read_only: bool,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            read_only: false,
        }
    }

    /// Refuse every write with [`Error::ReadOnly`].
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(Error::ReadOnly(self.dir.display().to_string()));
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidKey(key.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io_with_path(e, path)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_writable()?;
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| Error::io_with_path(e, &self.dir))?;

        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|e| Error::io_with_path(e, &tmp))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::io_with_path(e, path));
        }
        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote key");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.ensure_writable()?;
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io_with_path(e, path)),
        }
    }

    fn name(&self) -> &str {
        "file"
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
    fn test_get_missing_key() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("enspyre_leads").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let mut store = FileStore::new(&root);

        store.set("enspyre_leads", "[]").unwrap();

        assert!(root.join("enspyre_leads.json").exists());
        assert_eq!(store.get("enspyre_leads").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_replaces_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("k", "v").unwrap();

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn test_read_only_refuses_writes() {
        let dir = TempDir::new().unwrap();
        let mut writable = FileStore::new(dir.path());
        writable.set("k", "kept").unwrap();

        let mut store = FileStore::new(dir.path()).read_only(true);
        assert!(matches!(store.set("k", "lost"), Err(Error::ReadOnly(_))));
        assert!(matches!(store.remove("k"), Err(Error::ReadOnly(_))));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_invalid_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        for key in ["", "../escape", "a/b", ".hidden", "sp ace"] {
            assert!(
                matches!(store.get(key), Err(Error::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
        assert!(store.path_for("enspyre_leads").is_ok());
    }

    #[test]
    fn test_name() {
        assert_eq!(FileStore::new("/tmp").name(), "file");
    }
}
