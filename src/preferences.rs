//! Theme preference backed by the session-scoped store.
//!
//! Stored as the raw string `light` or `dark` under [`THEME_KEY`]. Anything
//! else reads as the default theme.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::model::Theme;
use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStore>,
    lock: Mutex<()>,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage, lock: Mutex::new(()) }
    }

    /// Current theme; `light` when unset or unrecognized.
    #[must_use]
    pub fn get_theme(&self) -> Theme {
        let _guard = self.guard();
        self.read()
    }

    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend write fails.
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        let _guard = self.guard();
        self.write(theme)
    }

    /// Set the theme from its string name.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for names other than `light`/`dark`.
    pub fn set_theme_str(&self, raw: &str) -> Result<()> {
        let theme = raw.parse::<Theme>()?;
        self.set_theme(theme)
    }

    /// Flip the theme and return the new value.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend write fails.
    pub fn toggle_theme(&self) -> Result<Theme> {
        let _guard = self.guard();
        let next = self.read().flipped();
        self.write(next)?;
        Ok(next)
    }

    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend write fails.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.guard();
        self.storage.remove(THEME_KEY)
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> Theme {
        let Some(raw) = self.storage.get(THEME_KEY) else {
            return Theme::default();
        };
        raw.parse().unwrap_or_else(|_| {
            let err = Error::StorageCorrupt { key: THEME_KEY.to_owned(), reason: format!("unknown theme '{raw}'") };
            tracing::warn!(code = err.error_code(), error = %err, "falling back to default theme");
            Theme::default()
        })
    }

    fn write(&self, theme: Theme) -> Result<()> {
        self.storage.set(THEME_KEY, theme.as_str())?;
        tracing::info!(%theme, "theme updated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;
