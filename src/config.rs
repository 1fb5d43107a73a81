//! Application configuration parsed from environment variables.

use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
pub const DEFAULT_DATA_DIR: &str = ".recipebox";
pub const DEFAULT_CATEGORY: &str = "Dessert";

/// File name of the durable store inside the data directory.
pub const DURABLE_STORE_FILE: &str = "storage.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub default_category: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_category: DEFAULT_CATEGORY.to_owned(),
        }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `RECIPEBOX_API_BASE_URL`: default TheMealDB v1 endpoint
    /// - `RECIPEBOX_DATA_DIR`: default `.recipebox`
    /// - `RECIPEBOX_DEFAULT_CATEGORY`: default `Dessert`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if a value is present but empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if a value is present but empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = non_empty(&lookup, "RECIPEBOX_API_BASE_URL")?
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let data_dir = non_empty(&lookup, "RECIPEBOX_DATA_DIR")?
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let default_category = non_empty(&lookup, "RECIPEBOX_DEFAULT_CATEGORY")?
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());

        let config = Self { api_base_url, data_dir, default_category };
        config.validated()
    }

    /// Normalize and check fields after overrides have been applied.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for an empty base URL or category.
    pub fn validated(mut self) -> Result<Self> {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_owned();
        if self.api_base_url.is_empty() {
            return Err(Error::InvalidArgument("api base URL must not be empty".into()));
        }
        if self.default_category.trim().is_empty() {
            return Err(Error::InvalidArgument("default category must not be empty".into()));
        }
        Ok(self)
    }

    #[must_use]
    pub fn durable_store_path(&self) -> PathBuf {
        self.data_dir.join(DURABLE_STORE_FILE)
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<String>> {
    match lookup(key) {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Err(Error::InvalidArgument(format!("{key} is set but empty"))),
        Some(v) => Ok(Some(v)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
