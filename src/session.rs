//! One application session: the recipe client plus both stores.
//!
//! DESIGN
//! ======
//! A `Session` is built once by the caller and passed where needed. It owns
//! the two storage scopes so that clear-all can wipe both, and it hosts the
//! composite operations the view dispatches (toggle-favorite by id, default
//! listing, detail with favorite status).

use std::sync::Arc;

use crate::api::RecipeClient;
use crate::config::AppConfig;
use crate::error::Result;
use crate::favorites::{FavoriteChange, FavoritesStore};
use crate::model::{Category, Recipe, Theme};
use crate::preferences::PreferenceStore;
#[cfg(feature = "hydrate")]
use crate::storage::{BrowserScope, BrowserStore};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

/// Category selector value meaning "the default listing".
pub const ALL_CATEGORIES: &str = "all";

/// A recipe detail together with its favorite status at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub is_favorite: bool,
}

pub struct Session {
    client: RecipeClient,
    favorites: FavoritesStore,
    preferences: PreferenceStore,
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
    default_category: String,
}

impl Session {
    #[must_use]
    pub fn new(
        client: RecipeClient,
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
        default_category: impl Into<String>,
    ) -> Self {
        Self {
            client,
            favorites: FavoritesStore::new(durable.clone()),
            preferences: PreferenceStore::new(session.clone()),
            durable,
            session,
            default_category: default_category.into(),
        }
    }

    /// Native session: HTTP client, file-backed durable scope, in-memory
    /// session scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the durable
    /// store file cannot be read.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = RecipeClient::http(&config.api_base_url)?;
        let durable = Arc::new(FileStore::open(config.durable_store_path())?);
        let session = Arc::new(MemoryStore::new());
        tracing::debug!(
            api = %config.api_base_url,
            store = %config.durable_store_path().display(),
            "session initialized"
        );
        Ok(Self::new(client, durable, session, config.default_category.clone()))
    }

    /// Browser session: `localStorage` as the durable scope and
    /// `sessionStorage` as the session scope.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser(client: RecipeClient, default_category: impl Into<String>) -> Self {
        Self::new(
            client,
            Arc::new(BrowserStore::new(BrowserScope::Durable)),
            Arc::new(BrowserStore::new(BrowserScope::Session)),
            default_category,
        )
    }

    #[must_use]
    pub fn client(&self) -> &RecipeClient {
        &self.client
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    #[must_use]
    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    #[must_use]
    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// # Errors
    ///
    /// Propagates recipe client errors.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.client.list_categories().await
    }

    /// Recipes in `category`; `None` or `"all"` selects the default category.
    ///
    /// # Errors
    ///
    /// Propagates recipe client errors.
    pub async fn recipes_in(&self, category: Option<&str>) -> Result<Vec<Recipe>> {
        let category = match category {
            None | Some(ALL_CATEGORIES) => self.default_category.as_str(),
            Some(name) => name,
        };
        self.client.list_by_category(category).await
    }

    /// # Errors
    ///
    /// Propagates recipe client errors.
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>> {
        self.client.search(query).await
    }

    /// # Errors
    ///
    /// Propagates recipe client errors, including `NotFound`.
    pub async fn detail(&self, id: &str) -> Result<RecipeDetail> {
        let recipe = self.client.get_by_id(id).await?;
        let is_favorite = self.favorites.contains(&recipe.id);
        Ok(RecipeDetail { recipe, is_favorite })
    }

    /// Fetch the full record for `id` and add it to favorites.
    ///
    /// # Errors
    ///
    /// Propagates recipe client and storage errors.
    pub async fn add_favorite(&self, id: &str) -> Result<bool> {
        let recipe = self.client.get_by_id(id).await?;
        self.favorites.add(recipe)
    }

    /// Remove `id` if it is a favorite, otherwise fetch and add it.
    ///
    /// Removal needs no network round trip. The final add/remove decision is
    /// left to [`FavoritesStore::toggle`], which makes it under its lock.
    ///
    /// # Errors
    ///
    /// Propagates recipe client and storage errors.
    pub async fn toggle_favorite(&self, id: &str) -> Result<FavoriteChange> {
        let fetched = if self.favorites.contains(id) {
            None
        } else {
            Some(self.client.get_by_id(id).await?)
        };
        self.favorites.toggle(id, fetched)
    }

    /// # Errors
    ///
    /// Returns `Error::Storage` if the backend write fails.
    pub fn toggle_theme(&self) -> Result<Theme> {
        self.preferences.toggle_theme()
    }

    /// Wipe both storage scopes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if either backend fails to clear.
    pub fn clear_all(&self) -> Result<()> {
        self.durable.clear()?;
        self.session.clear()?;
        tracing::info!("all stored data cleared");
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
