//! Durable store backed by a single JSON object file.
//!
//! The whole map is held in memory and rewritten on every mutation through a
//! temp file + rename, so a crash mid-write leaves the previous file intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::KeyValueStore;
use crate::error::{Error, Result};

pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// strings is logged and treated as empty; it is replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => decode(&path, &raw),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(Error::Storage(format!("read {}: {e}", path.display()))),
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "file store opened");
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `mutate` to a copy, persist it, and only then commit in memory.
    fn write_with(&self, mutate: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let mut entries = self.entries();
        let mut next = entries.clone();
        mutate(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let storage_err = |e: std::io::Error| Error::Storage(format!("write {}: {e}", self.path.display()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(storage_err)?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|e| Error::Storage(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(storage_err)?;
        fs::rename(&tmp, &self.path).map_err(storage_err)?;
        Ok(())
    }
}

fn decode(path: &Path, raw: &str) -> BTreeMap<String, String> {
    if raw.trim().is_empty() {
        return BTreeMap::new();
    }
    serde_json::from_str(raw).unwrap_or_else(|e| {
        let err = Error::StorageCorrupt { key: path.display().to_string(), reason: e.to_string() };
        tracing::warn!(code = err.error_code(), error = %err, "ignoring unreadable store file");
        BTreeMap::new()
    })
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write_with(|m| {
            m.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.entries().contains_key(key) {
            return Ok(());
        }
        self.write_with(|m| {
            m.remove(key);
        })
    }

    fn clear(&self) -> Result<()> {
        self.write_with(|m| m.clear())
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
