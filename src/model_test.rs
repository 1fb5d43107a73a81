use super::*;

#[test]
fn theme_parses_known_names() {
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
}

#[test]
fn theme_rejects_unknown_names() {
    let err = "Dark".parse::<Theme>().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_flipped_twice_is_identity() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
}

#[test]
fn summary_is_not_detailed() {
    let recipe = Recipe::summary("1", "Pie", "http://img");
    assert!(!recipe.is_detailed());
}

#[test]
fn persisted_recipe_omits_empty_optionals() {
    let recipe = Recipe::summary("1", "Pie", "");
    let value = serde_json::to_value(&recipe).unwrap();
    assert!(value.get("category").is_none());
    assert!(value.get("tags").is_none());
    assert_eq!(value["ingredients"], serde_json::json!([]));
}

#[test]
fn persisted_recipe_tolerates_missing_collections() {
    let recipe: Recipe = serde_json::from_str(r#"{"id":"7","name":"Soup"}"#).unwrap();
    assert_eq!(recipe.id, "7");
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.thumbnail_url.is_empty());
}
