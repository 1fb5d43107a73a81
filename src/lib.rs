//! Recipe browser core: a read-only client for TheMealDB-style APIs plus a
//! persisted favorites collection and theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches and normalizes remote records, `favorites` and `preferences`
//! persist user state through the `storage` capability, and `session` bundles
//! them for a front end. `view` renders the model as plain text for the
//! bundled terminal front end.

pub mod api;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod preferences;
pub mod session;
pub mod storage;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use api::RecipeClient;
pub use config::AppConfig;
pub use error::{Error, Result};
pub use favorites::{FavoriteChange, FavoritesStore};
pub use model::{Category, Ingredient, Recipe, Theme};
pub use preferences::PreferenceStore;
pub use session::{RecipeDetail, Session};
