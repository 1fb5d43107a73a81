//! Persistent key-value storage capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stores read and write through `KeyValueStore` only. Two scopes are
//! used: a durable scope for favorites and a session scope for the theme.
//! `MemoryStore` and `FileStore` back those scopes natively; `BrowserStore`
//! (feature `hydrate`) maps them onto `localStorage` / `sessionStorage`.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod file;

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

#[cfg(feature = "hydrate")]
pub use browser::{BrowserScope, BrowserStore};
pub use file::FileStore;

use crate::error::Result;

/// Synchronous string-keyed storage.
///
/// Reads never fail: an unreadable backend reads as absent. Writes report
/// backend failures as `Error::Storage`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend rejects the write.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key in this scope.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend rejects the write.
    fn clear(&self) -> Result<()>;
}

/// In-process map. Its lifetime is the session scope of a native session.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries().clear();
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
