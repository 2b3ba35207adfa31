use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Keys and values kept in process memory only
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Keys and values stored as a flat JSON object in a single file
///
/// The file is read on every access, so edits made between runs are picked up
/// and nothing is cached that could go stale.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {:?}", self.path))?;
        serde_json::from_str(&text).with_context(|| format!("Failed to parse {:?}", self.path))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // a corrupt file is replaced rather than blocking every future save
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(&entries).context("Failed to serialize entries")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {:?}", self.path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("bestScore").unwrap(), None);

        store.set("bestScore", "40").unwrap();
        assert_eq!(store.get("bestScore").unwrap().as_deref(), Some("40"));
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("scores.json"));
        assert_eq!(store.get("bestScore").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("scores.json");

        let mut store = JsonFileStore::new(&path);
        store.set("bestScore", "120").unwrap();
        store.set("other", "x").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("bestScore").unwrap().as_deref(), Some("120"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(store.get("bestScore").is_err());

        store.set("bestScore", "10").unwrap();
        assert_eq!(store.get("bestScore").unwrap().as_deref(), Some("10"));
    }
}
