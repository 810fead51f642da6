// Cache slot stores.
// A slot is a named string value, the terminal analog of one browser
// storage key. Expiry and payload shape are the caller's concern.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

use super::paths;

/// A named key-value slot store.
///
/// `get` returning `None` means absent; callers treat unparseable or stale
/// values as absent too and `remove` them.
pub trait CacheSlot: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str);
}

/// Filesystem-backed store: one JSON file per key under the user cache
/// directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store in the default cache directory. `None` when no home
    /// directory can be resolved.
    pub fn new() -> Option<Self> {
        paths::cache_dir().map(|dir| Self { dir })
    }

    /// Open the store in an explicit directory.
    pub fn in_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", paths::sanitize_key(key)))
    }
}

impl CacheSlot for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    fn remove(&mut self, key: &str) {
        let _ = fs::remove_file(self.slot_path(key));
    }
}

/// In-memory store for tests and cacheless fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheSlot for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(temp_dir.path().to_path_buf());

        assert!(store.get("slot").is_none());

        store.set("slot", r#"{"answer":42}"#).unwrap();
        assert_eq!(store.get("slot").as_deref(), Some(r#"{"answer":42}"#));

        store.set("slot", "replaced").unwrap();
        assert_eq!(store.get("slot").as_deref(), Some("replaced"));

        store.remove("slot");
        assert!(store.get("slot").is_none());
    }

    #[test]
    fn test_file_store_remove_missing_is_quiet() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(temp_dir.path().to_path_buf());
        store.remove("never-written");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();

        assert!(store.get("slot").is_none());
        store.set("slot", "value").unwrap();
        assert_eq!(store.get("slot").as_deref(), Some("value"));
        store.remove("slot");
        assert!(store.get("slot").is_none());
    }
}
