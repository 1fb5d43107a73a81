//! Plain-text rendering of the view model for the terminal front end.
//!
//! Pure functions from model values to `String`; the binary decides where
//! the text goes.

use crate::favorites::FavoriteChange;
use crate::model::{Category, Ingredient, Recipe, Theme};
use crate::session::RecipeDetail;

/// Shown in place of a missing category.
pub const CATEGORY_FALLBACK: &str = "Recipe";
pub const EMPTY_RESULTS: &str = "No recipes found.";
pub const EMPTY_FAVORITES: &str = "No favorites yet.";

#[must_use]
pub fn categories(categories: &[Category]) -> String {
    categories.iter().map(|c| format!("{}\n", c.name)).collect()
}

/// One line per recipe: id, name, and category.
#[must_use]
pub fn recipe_list(recipes: &[Recipe], empty_message: &str) -> String {
    if recipes.is_empty() {
        return format!("{empty_message}\n");
    }
    let width = recipes.iter().map(|r| r.id.len()).max().unwrap_or(0);
    recipes
        .iter()
        .map(|recipe| {
            let category = recipe.category.as_deref().unwrap_or(CATEGORY_FALLBACK);
            format!("{:>width$}  {}  [{category}]\n", recipe.id, recipe.name)
        })
        .collect()
}

/// `"200g Sugar"`, or just the name when no measure was given.
#[must_use]
pub fn ingredient_line(ingredient: &Ingredient) -> String {
    if ingredient.measure.is_empty() {
        ingredient.name.clone()
    } else {
        format!("{} {}", ingredient.measure, ingredient.name)
    }
}

#[must_use]
pub fn recipe_detail(detail: &RecipeDetail) -> String {
    let recipe = &detail.recipe;
    let marker = if detail.is_favorite { " ♥" } else { "" };
    let mut lines = vec![format!("{}{marker}", recipe.name)];

    let mut meta = vec![recipe.category.as_deref().unwrap_or(CATEGORY_FALLBACK)];
    if let Some(area) = &recipe.area {
        meta.push(area.as_str());
    }
    lines.push(meta.join(" · "));
    if !recipe.tags.is_empty() {
        lines.push(format!("Tags: {}", recipe.tags.join(", ")));
    }
    if !recipe.thumbnail_url.is_empty() {
        lines.push(format!("Image: {}", recipe.thumbnail_url));
    }

    lines.push(String::new());
    lines.push("Ingredients".to_owned());
    lines.extend(recipe.ingredients.iter().map(|i| format!("  - {}", ingredient_line(i))));

    lines.push(String::new());
    lines.push("Instructions".to_owned());
    lines.extend(
        recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(n, step)| format!("  {}. {step}", n + 1)),
    );

    if let Some(url) = &recipe.youtube_url {
        lines.push(String::new());
        lines.push(format!("Video: {url}"));
    }
    if let Some(url) = &recipe.source_url {
        lines.push(format!("Source: {url}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[must_use]
pub fn favorite_change(change: FavoriteChange, id: &str) -> String {
    match change {
        FavoriteChange::Added => format!("Added {id} to favorites."),
        FavoriteChange::Removed => format!("Removed {id} from favorites."),
    }
}

#[must_use]
pub fn theme_changed(theme: Theme) -> String {
    format!("Theme changed to {theme}.")
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
