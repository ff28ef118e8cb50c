//! Small key-value persistence used by the onboarding flow, in place of the
//! browser's local storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{AppError, Result};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

fn poisoned() -> AppError {
    AppError::Custom("Store lock poisoned".into())
}

/// Flat string map persisted as pretty JSON.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub const FILE_NAME: &'static str = "store.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `<dir>/store.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file or non-JSON contents read as an empty map. Any other
    /// read failure is an error, so a later write can't clobber the file.
    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                tracing::warn!("Cannot read store at {}: {}", self.path.display(), e);
                return Err(e.into());
            }
        };
        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!("Ignoring corrupt store at {}: {}", self.path.display(), e);
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)?;
        tracing::debug!("Stored '{}' in {}", key, self.path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-memory store, for tests and for running without a home directory.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<BTreeMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.map.lock().map_err(|_| poisoned())?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.map.lock().map_err(|_| poisoned())?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.map.lock().map_err(|_| poisoned())?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("dir");

        let store = JsonFileStore::in_dir(&nested);
        assert_eq!(store.get("hasSeenOnboarding").unwrap(), None);
        store.set("hasSeenOnboarding", "true").unwrap();

        let reopened = JsonFileStore::in_dir(&nested);
        assert_eq!(
            reopened.get("hasSeenOnboarding").unwrap().as_deref(),
            Some("true")
        );

        reopened.remove("hasSeenOnboarding").unwrap();
        assert_eq!(store.get("hasSeenOnboarding").unwrap(), None);
    }

    #[test]
    fn test_file_store_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        std::fs::write(store.path(), "{ definitely not json").unwrap();

        assert_eq!(store.get("anything").unwrap(), None);
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_refuses_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        let original = b"{\"surveyAnswers\":\"keep\xFF\",\"hasSeenOnboarding\":\"true\"}".to_vec();
        std::fs::write(store.path(), &original).unwrap();

        assert!(matches!(
            store.get("hasSeenOnboarding"),
            Err(AppError::Io(_))
        ));
        assert!(store.set("personaResult", "x").is_err());
        assert!(store.remove("surveyAnswers").is_err());
        assert_eq!(std::fs::read(store.path()).unwrap(), original);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        store.remove("ghost").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }
}
