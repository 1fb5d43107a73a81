//! Browser `localStorage` / `sessionStorage` backend.
//!
//! Holds no JS handles; the `Storage` object is looked up per call so the
//! type stays `Send + Sync`. Requires a browser environment.

use super::KeyValueStore;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserScope {
    /// `window.localStorage`, kept across sessions.
    Durable,
    /// `window.sessionStorage`, cleared when the tab closes.
    Session,
}

#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    scope: BrowserScope,
}

impl BrowserStore {
    #[must_use]
    pub fn new(scope: BrowserScope) -> Self {
        Self { scope }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.scope {
            BrowserScope::Durable => window.local_storage().ok().flatten(),
            BrowserScope::Session => window.session_storage().ok().flatten(),
        }
    }

    fn require(&self) -> Result<web_sys::Storage> {
        self.storage()
            .ok_or_else(|| Error::Storage(format!("{:?} browser storage unavailable", self.scope)))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.require()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("setItem({key}) failed: {e:?}")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.require()?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("removeItem({key}) failed: {e:?}")))
    }

    fn clear(&self) -> Result<()> {
        self.require()?
            .clear()
            .map_err(|e| Error::Storage(format!("clear failed: {e:?}")))
    }
}

#[cfg(test)]
#[path = "browser_test.rs"]
mod tests;
