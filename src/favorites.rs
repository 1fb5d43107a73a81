//! Favorites store: a deduplicated, insertion-ordered recipe list.
//!
//! The collection is persisted as one JSON array under [`FAVORITES_KEY`] in the
//! durable scope. Every mutation rewrites the whole array before returning.
//! A lock spans each read-modify-write so concurrent callers cannot interleave
//! between the read and the write.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::model::Recipe;
use crate::storage::KeyValueStore;

pub const FAVORITES_KEY: &str = "favorites";

/// Outcome of [`FavoritesStore::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStore>,
    lock: Mutex<()>,
}

impl FavoritesStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage, lock: Mutex::new(()) }
    }

    /// Current favorites in insertion order. Absent or corrupt data is empty.
    #[must_use]
    pub fn list(&self) -> Vec<Recipe> {
        let _guard = self.guard();
        self.load()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        let _guard = self.guard();
        self.load().iter().any(|r| r.id == id)
    }

    /// Add `recipe` unless its id is already present.
    ///
    /// Returns `false` without writing when it is a duplicate.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend write fails.
    pub fn add(&self, recipe: Recipe) -> Result<bool> {
        let _guard = self.guard();
        let mut favorites = self.load();
        if favorites.iter().any(|r| r.id == recipe.id) {
            return Ok(false);
        }
        tracing::info!(id = %recipe.id, name = %recipe.name, "favorite added");
        favorites.push(recipe);
        self.save(&favorites)?;
        Ok(true)
    }

    /// Remove any entry with `id`. Removing an absent id is not an error and
    /// leaves the stored blob untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend write fails.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let _guard = self.guard();
        let mut favorites = self.load();
        let before = favorites.len();
        favorites.retain(|r| r.id != id);
        if favorites.len() == before {
            return Ok(true);
        }
        self.save(&favorites)?;
        tracing::info!(id, "favorite removed");
        Ok(true)
    }

    /// Remove `id` if present, otherwise add `fetched`.
    ///
    /// The present/absent decision is made under the store lock. `fetched` is
    /// the full record the caller loaded for the add case; `None` means the
    /// caller saw `id` as a favorite, so an `id` that is already gone is a
    /// `Removed` no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `fetched` carries a different id,
    /// and `Error::Storage` if the backend write fails.
    pub fn toggle(&self, id: &str, fetched: Option<Recipe>) -> Result<FavoriteChange> {
        let _guard = self.guard();
        let mut favorites = self.load();
        if let Some(pos) = favorites.iter().position(|r| r.id == id) {
            favorites.remove(pos);
            self.save(&favorites)?;
            tracing::info!(id, change = ?FavoriteChange::Removed, "favorite toggled");
            return Ok(FavoriteChange::Removed);
        }
        let Some(recipe) = fetched else {
            tracing::debug!(id, "favorite already removed");
            return Ok(FavoriteChange::Removed);
        };
        if recipe.id != id {
            return Err(Error::InvalidArgument(format!(
                "toggle for favorite `{id}` was given recipe `{}`",
                recipe.id
            )));
        }
        favorites.push(recipe);
        self.save(&favorites)?;
        tracing::info!(id, change = ?FavoriteChange::Added, "favorite toggled");
        Ok(FavoriteChange::Added)
    }

    /// Wipe the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend write fails.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.guard();
        self.storage.remove(FAVORITES_KEY)
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Vec<Recipe> {
        let Some(raw) = self.storage.get(FAVORITES_KEY) else {
            return Vec::new();
        };
        decode(&raw).unwrap_or_else(|err| {
            tracing::warn!(code = err.error_code(), error = %err, "treating favorites as empty");
            Vec::new()
        })
    }

    fn save(&self, favorites: &[Recipe]) -> Result<()> {
        let raw = serde_json::to_string(favorites).map_err(|e| Error::Storage(e.to_string()))?;
        self.storage.set(FAVORITES_KEY, &raw)
    }
}

/// Decode a persisted favorites blob.
///
/// Duplicate ids written by an older or foreign writer are collapsed to the
/// first occurrence.
fn decode(raw: &str) -> Result<Vec<Recipe>> {
    let mut favorites: Vec<Recipe> = serde_json::from_str(raw).map_err(|e| Error::StorageCorrupt {
        key: FAVORITES_KEY.to_owned(),
        reason: e.to_string(),
    })?;
    let mut seen = std::collections::HashSet::new();
    favorites.retain(|r| seen.insert(r.id.clone()));
    Ok(favorites)
}

#[cfg(test)]
#[path = "favorites_test.rs"]
mod tests;
