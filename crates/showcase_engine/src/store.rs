//! Durable key-value storage for small JSON blobs.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use showcase_logging::showcase_warn;
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
    #[error("store unavailable")]
    Unavailable,
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// `get` never fails: unreadable entries read as missing.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    writer: AtomicFileWriter,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }

    fn file_name(key: &str) -> Result<String, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(format!("{key}.json"))
        } else {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.writer.dir().join(Self::file_name(key).ok()?);
        match fs::read_to_string(&path) {
            Ok(blob) => Some(blob),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                showcase_warn!("Failed to read {:?}: {}", path, err);
                None
            }
        }
    }

    fn set(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let file_name = Self::file_name(key)?;
        self.writer.write(&file_name, blob)?;
        Ok(())
    }
}

/// In-process store for tests and for running without a state directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    failing: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates storage that is unavailable: reads miss, writes fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Stores `blob` directly, bypassing the failure switch.
    pub fn seed(&self, key: &str, blob: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), blob.to_string());
        }
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        if self.failing.load(Ordering::SeqCst) {
            return None;
        }
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        let mut entries = self.entries.lock().map_err(|_| StoreError::Unavailable)?;
        entries.insert(key.to_string(), blob.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
