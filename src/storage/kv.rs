//! Durable key-value side-stores
//!
//! The ledger persists itself as serialized text under a handful of string
//! keys. `MemoryStore` keeps those keys in process (and can simulate a size
//! quota); `FileStore` keeps one JSON file per key in a directory.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{BuddyError, BuddyResult};

use super::file_io::write_atomic;

/// A durable string-to-string store
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> BuddyResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> BuddyResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> BuddyResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> BuddyResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> BuddyResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> BuddyResult<()> {
        (**self).remove(key)
    }
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// Maximum total bytes of keys plus values
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes once keys plus values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BuddyResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BuddyResult<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(BuddyError::Storage(format!(
                    "Quota exceeded writing '{}': {} bytes needed, {} allowed",
                    key, needed, quota
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BuddyResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed store, one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BuddyResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| BuddyError::Storage(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn set(&mut self, key: &str, value: &str) -> BuddyResult<()> {
        write_atomic(self.key_path(key), value)
    }

    fn remove(&mut self, key: &str) -> BuddyResult<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                BuddyError::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("expenses").unwrap(), None);

        store.set("expenses", "[]").unwrap();
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);

        store.remove("expenses").unwrap();
        store.remove("expenses").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_quota() {
        let mut store = MemoryStore::with_quota(20);
        store.set("k", "0123456789").unwrap();
        // Overwriting the same key only counts the new value
        store.set("k", "9876543210").unwrap();

        let err = store.set("other", "0123456789").unwrap_err();
        assert!(matches!(err, BuddyError::Storage(_)));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.get("budgetGoal").unwrap(), None);
        store.set("budgetGoal", r#"{"a":1}"#).unwrap();
        assert!(temp_dir.path().join("data").join("budgetGoal.json").exists());

        let reopened = FileStore::new(temp_dir.path().join("data"));
        assert_eq!(
            reopened.get("budgetGoal").unwrap().as_deref(),
            Some(r#"{"a":1}"#)
        );

        store.remove("budgetGoal").unwrap();
        assert_eq!(store.get("budgetGoal").unwrap(), None);
    }

    #[test]
    fn test_store_through_mut_ref() {
        fn write_through<S: KeyValueStore>(mut store: S) {
            store.set("key", "value").unwrap();
        }

        let mut store = MemoryStore::new();
        write_through(&mut store);
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    }
}
