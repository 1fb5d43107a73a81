//! Recipe client for TheMealDB-compatible APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` owns the HTTP call, `parse` owns the JSON-to-model step, and
//! `RecipeClient` maps the four read-only operations onto endpoints. The
//! client holds no state beyond its transport: no cache, no retries.

pub mod parse;
pub mod transport;

use std::sync::Arc;

pub use transport::{HttpTransport, Transport};

use crate::error::Result;
use crate::model::{Category, Recipe};

pub const CATEGORIES_ENDPOINT: &str = "categories.php";
pub const FILTER_ENDPOINT: &str = "filter.php";
pub const LOOKUP_ENDPOINT: &str = "lookup.php";
pub const SEARCH_ENDPOINT: &str = "search.php";

/// Read-only client over the remote recipe API.
#[derive(Clone)]
pub struct RecipeClient {
    transport: Arc<dyn Transport>,
}

impl RecipeClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a client that talks HTTP to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn http(base_url: &str) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(base_url)?)))
    }

    /// List every category.
    ///
    /// # Errors
    ///
    /// `Network`/`HttpStatus` on transport failure, `Parse` on a malformed body.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let body = self.fetch(CATEGORIES_ENDPOINT, &[]).await?;
        parse::parse_categories(&body).inspect_err(|e| log_failure(CATEGORIES_ENDPOINT, e))
    }

    /// List recipe summaries in `category`. No matches is an empty list.
    ///
    /// # Errors
    ///
    /// `Network`/`HttpStatus` on transport failure, `Parse` on a malformed body.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Recipe>> {
        let body = self.fetch(FILTER_ENDPOINT, &[("c", category)]).await?;
        parse::parse_meals(&body).inspect_err(|e| log_failure(FILTER_ENDPOINT, e))
    }

    /// Search recipes by name. The query is sent as given, even when empty.
    ///
    /// # Errors
    ///
    /// `Network`/`HttpStatus` on transport failure, `Parse` on a malformed body.
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>> {
        let body = self.fetch(SEARCH_ENDPOINT, &[("s", query)]).await?;
        parse::parse_meals(&body).inspect_err(|e| log_failure(SEARCH_ENDPOINT, e))
    }

    /// Fetch the full record for `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` when the API has no such recipe, otherwise as above.
    pub async fn get_by_id(&self, id: &str) -> Result<Recipe> {
        let body = self.fetch(LOOKUP_ENDPOINT, &[("i", id)]).await?;
        parse::parse_lookup(&body, id).inspect_err(|e| log_failure(LOOKUP_ENDPOINT, e))
    }

    async fn fetch(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String> {
        self.transport
            .get(endpoint, query)
            .await
            .inspect_err(|e| log_failure(endpoint, e))
    }
}

fn log_failure(endpoint: &str, error: &crate::Error) {
    tracing::warn!(endpoint, code = error.error_code(), error = %error, "recipe api call failed");
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
