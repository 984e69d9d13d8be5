//! crates/recipe_box_core/src/memory.rs
//!
//! A `KeyValueStorage` held entirely in memory, for tests and embedders that
//! bring no storage of their own.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::ports::{KeyValueStorage, PortError, PortResult};

/// In-memory, HashMap-based key-value storage.
///
/// Intended for tests and embedding. Reads and writes can be made to fail on
/// demand to exercise the store's recovery paths.
pub struct InMemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryStorage {
    /// Create a new empty storage.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    /// Create a storage already holding `value` under `key`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            entries: RwLock::new(HashMap::from([(key.to_string(), value.to_string())])),
            ..Self::new()
        }
    }

    /// Make every subsequent `get` fail (or succeed again).
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw value under `key`, bypassing failure injection. `None` if the lock
    /// is poisoned.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PortError::Unavailable("storage read refused".to_string()));
        }
        let entries = self
            .entries
            .read()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PortError::Unavailable("storage quota exceeded".to_string()));
        }
        self.entries
            .write()
            .map_err(|e| PortError::Unexpected(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.entries.read().map(|m| m.len()).unwrap_or(0);
        f.debug_struct("InMemoryStorage")
            .field("entry_count", &count)
            .field("write_count", &self.write_count())
            .finish()
    }
}
