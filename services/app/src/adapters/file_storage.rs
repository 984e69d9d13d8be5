//! services/app/src/adapters/file_storage.rs
//!
//! This module contains the file-backed storage adapter, which is the concrete
//! implementation of the `KeyValueStorage` port from the `core` crate. All keys
//! live in one JSON object on disk, the way a browser keeps local storage per
//! origin.

use recipe_box_core::ports::{KeyValueStorage, PortError, PortResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

use crate::error::AppError;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A storage adapter that implements the `KeyValueStorage` port on a JSON file.
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file.
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Creates a new `FileStorage`, creating the parent directory if needed.
    /// The file itself is only created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> PortResult<BTreeMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(PortError::Unavailable(e.to_string())),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|e| {
            PortError::Unexpected(format!("{} is not a storage file: {}", self.path.display(), e))
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> PortResult<()> {
        let payload =
            serde_json::to_string_pretty(entries).map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Write next to the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, payload).map_err(|e| PortError::Unavailable(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| PortError::Unavailable(e.to_string()))
    }
}

//=========================================================================================
// `KeyValueStorage` Trait Implementation
//=========================================================================================

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(PortError::Unexpected(reason)) => {
                warn!(%reason, "Replacing unreadable storage file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("box.json")).unwrap();
        assert_eq!(storage.get("recipes").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("box.json");

        FileStorage::open(&path).unwrap().set("recipes", "[1,2]").unwrap();
        let reopened = FileStorage::open(&path).unwrap();

        assert_eq!(reopened.get("recipes").unwrap().as_deref(), Some("[1,2]"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn other_keys_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("box.json")).unwrap();
        storage.set("theme", "dark").unwrap();
        storage.set("recipes", "[]").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn garbage_file_fails_reads_until_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.json");
        std::fs::write(&path, "not json at all").unwrap();
        let storage = FileStorage::open(&path).unwrap();

        assert!(matches!(storage.get("recipes"), Err(PortError::Unexpected(_))));

        storage.set("recipes", "[]").unwrap();
        assert_eq!(storage.get("recipes").unwrap().as_deref(), Some("[]"));
    }
}
