//! Domain view model shared by the client, the stores, and the view.
//!
//! These types are the normalized form of the remote API's records. They are
//! also the persisted form of the favorites collection, so field renames here
//! change the on-disk schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A recipe category such as `Dessert` or `Seafood`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One `(measure, name)` line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Free-form quantity such as `200g`. Empty when the API gave none.
    pub measure: String,
    pub name: String,
}

impl Ingredient {
    #[must_use]
    pub fn new(measure: impl Into<String>, name: impl Into<String>) -> Self {
        Self { measure: measure.into(), name: name.into() }
    }
}

/// A single dish.
///
/// Records from the list endpoints are summaries: `ingredients` and
/// `instructions` are empty and `category` is usually `None`. Records from
/// `lookup.php` and `search.php` are complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Recipe {
    /// Build a bare summary with only the identifying fields set.
    #[must_use]
    pub fn summary(id: impl Into<String>, name: impl Into<String>, thumbnail_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail_url: thumbnail_url.into(),
            category: None,
            area: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: Vec::new(),
            youtube_url: None,
            source_url: None,
        }
    }

    /// True when this record came from a detail endpoint rather than a listing.
    #[must_use]
    pub fn is_detailed(&self) -> bool {
        !self.ingredients.is_empty() || !self.instructions.is_empty()
    }
}

/// Light/dark visual preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(Error::InvalidArgument(format!("unknown theme '{other}' (expected 'light' or 'dark')"))),
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
