//! Parse step between the remote API's loose JSON and the domain model.
//!
//! Envelope shapes are checked strictly (`Error::Parse` on mismatch) while
//! the per-recipe normalization of ingredients and instructions is total: a
//! malformed detail record yields fewer entries, never an error.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{Category, Ingredient, Recipe};

/// Number of indexed `strIngredientN` / `strMeasureN` slots on a detail record.
pub const INGREDIENT_SLOTS: usize = 20;

#[derive(Deserialize)]
struct CategoriesEnvelope {
    categories: Option<Vec<WireCategory>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCategory {
    str_category: String,
    #[serde(default)]
    id_category: Option<String>,
    #[serde(default)]
    str_category_thumb: Option<String>,
    #[serde(default)]
    str_category_description: Option<String>,
}

#[derive(Deserialize)]
struct MealsEnvelope {
    /// `null` when the API has no matches. The key itself is required.
    #[serde(deserialize_with = "Option::deserialize")]
    meals: Option<Vec<Map<String, Value>>>,
}

/// Parse a `categories.php` body.
///
/// # Errors
///
/// Returns `Error::Parse` if the body is not JSON, `categories` is missing or
/// null, or an element has no `strCategory`.
pub fn parse_categories(body: &str) -> Result<Vec<Category>> {
    let envelope: CategoriesEnvelope = serde_json::from_str(body)?;
    let categories = envelope
        .categories
        .ok_or_else(|| Error::Parse("missing `categories` array".into()))?;
    Ok(categories
        .into_iter()
        .map(|c| Category {
            name: c.str_category,
            id: c.id_category,
            thumbnail_url: c.str_category_thumb,
            description: c.str_category_description,
        })
        .collect())
}

/// Parse a `filter.php` or `search.php` body. `meals: null` is an empty list.
///
/// # Errors
///
/// Returns `Error::Parse` if the body is not JSON, has no `meals` key, or an
/// element lacks a required field.
pub fn parse_meals(body: &str) -> Result<Vec<Recipe>> {
    let envelope: MealsEnvelope = serde_json::from_str(body)?;
    envelope
        .meals
        .unwrap_or_default()
        .iter()
        .map(parse_recipe)
        .collect()
}

/// Parse a `lookup.php` body into its single record.
///
/// # Errors
///
/// Returns `Error::NotFound` when `meals` is null or empty, and
/// `Error::Parse` for malformed bodies, including one with no `meals` key.
pub fn parse_lookup(body: &str, id: &str) -> Result<Recipe> {
    let envelope: MealsEnvelope = serde_json::from_str(body)?;
    let record = envelope
        .meals
        .and_then(|meals| meals.into_iter().next())
        .ok_or_else(|| Error::NotFound { id: id.to_owned() })?;
    parse_recipe(&record)
}

/// Convert one raw meal object into a [`Recipe`].
///
/// `idMeal` and `strMeal` are required. Everything else is optional.
///
/// # Errors
///
/// Returns `Error::Parse` if a required field is missing or not a string.
pub fn parse_recipe(raw: &Map<String, Value>) -> Result<Recipe> {
    let id = required_str(raw, "idMeal")?;
    let name = required_str(raw, "strMeal")?;

    Ok(Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        thumbnail_url: non_blank(raw, "strMealThumb").unwrap_or_default(),
        category: non_blank(raw, "strCategory"),
        area: non_blank(raw, "strArea"),
        ingredients: normalize_ingredients(raw),
        instructions: normalize_instructions(raw.get("strInstructions").and_then(Value::as_str)),
        tags: split_tags(raw.get("strTags").and_then(Value::as_str)),
        youtube_url: non_blank(raw, "strYoutube"),
        source_url: non_blank(raw, "strSource"),
    })
}

/// Scan slots `1..=20` and keep every slot whose ingredient name is non-blank.
#[must_use]
pub fn normalize_ingredients(raw: &Map<String, Value>) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let name = raw
                .get(&format!("strIngredient{slot}"))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())?;
            let measure = raw
                .get(&format!("strMeasure{slot}"))
                .and_then(Value::as_str)
                .map_or("", str::trim);
            Some(Ingredient::new(measure, name))
        })
        .collect()
}

/// Split instruction text into non-blank lines, in order.
///
/// `\r\n` is the API's line break; a bare `\n` is accepted as well.
#[must_use]
pub fn normalize_instructions(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

fn required_str<'a>(raw: &'a Map<String, Value>, key: &'static str) -> Result<&'a str> {
    raw.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Parse(format!("meal record missing string field `{key}`")))
}

fn non_blank(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
