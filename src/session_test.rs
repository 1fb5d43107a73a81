use super::*;
use crate::api::{FILTER_ENDPOINT, LOOKUP_ENDPOINT};
use crate::favorites::FAVORITES_KEY;
use crate::preferences::THEME_KEY;
use crate::test_helpers::{MockTransport, Reply, client, lookup_body, recipe};

struct Fixture {
    mock: Arc<MockTransport>,
    durable: Arc<MemoryStore>,
    session_store: Arc<MemoryStore>,
    session: Session,
}

fn fixture(mock: MockTransport) -> Fixture {
    let mock = Arc::new(mock);
    let durable = Arc::new(MemoryStore::new());
    let session_store = Arc::new(MemoryStore::new());
    let session = Session::new(client(mock.clone()), durable.clone(), session_store.clone(), "Dessert");
    Fixture { mock, durable, session_store, session }
}

fn filter_query(mock: &MockTransport) -> Vec<(String, String)> {
    mock.calls.lock().unwrap()[0].1.clone()
}

#[tokio::test]
async fn all_selects_default_category() {
    let fx = fixture(MockTransport::default().json(FILTER_ENDPOINT, serde_json::json!({ "meals": null })));
    assert!(fx.session.recipes_in(Some(ALL_CATEGORIES)).await.unwrap().is_empty());
    assert_eq!(filter_query(&fx.mock), vec![("c".to_owned(), "Dessert".to_owned())]);
}

#[tokio::test]
async fn none_selects_default_category() {
    let fx = fixture(MockTransport::default().json(FILTER_ENDPOINT, serde_json::json!({ "meals": [] })));
    fx.session.recipes_in(None).await.unwrap();
    assert_eq!(filter_query(&fx.mock)[0].1, "Dessert");
}

#[tokio::test]
async fn named_category_is_passed_through() {
    let fx = fixture(MockTransport::default().json(FILTER_ENDPOINT, serde_json::json!({ "meals": [] })));
    fx.session.recipes_in(Some("Seafood")).await.unwrap();
    assert_eq!(filter_query(&fx.mock)[0].1, "Seafood");
}

#[tokio::test]
async fn detail_reports_favorite_status() {
    let fx = fixture(MockTransport::default().json(LOOKUP_ENDPOINT, lookup_body("1", "Pie")));
    assert!(!fx.session.detail("1").await.unwrap().is_favorite);

    fx.session.favorites().add(recipe("1", "Pie")).unwrap();
    let detail = fx.session.detail("1").await.unwrap();
    assert!(detail.is_favorite);
    assert_eq!(detail.recipe.ingredients.len(), 1);
}

#[tokio::test]
async fn toggle_favorite_fetches_full_record_on_add() {
    let fx = fixture(MockTransport::default().json(LOOKUP_ENDPOINT, lookup_body("42", "Tart")));
    assert_eq!(fx.session.toggle_favorite("42").await.unwrap(), FavoriteChange::Added);

    let favorites = fx.session.favorites().list();
    assert_eq!(favorites.len(), 1);
    assert!(favorites[0].is_detailed());
}

#[tokio::test]
async fn toggle_favorite_removes_without_network() {
    let fx = fixture(MockTransport::default().with(LOOKUP_ENDPOINT, Reply::Offline));
    fx.session.favorites().add(recipe("42", "Tart")).unwrap();

    assert_eq!(fx.session.toggle_favorite("42").await.unwrap(), FavoriteChange::Removed);
    assert_eq!(fx.mock.call_count(), 0);
    assert!(fx.session.favorites().list().is_empty());
}

#[tokio::test]
async fn toggle_favorite_propagates_lookup_failure() {
    let fx = fixture(MockTransport::default().json(LOOKUP_ENDPOINT, serde_json::json!({ "meals": null })));
    let err = fx.session.toggle_favorite("9").await.unwrap_err();
    assert!(matches!(err, crate::Error::NotFound { .. }));
    assert!(fx.session.favorites().list().is_empty());
}

#[tokio::test]
async fn toggle_favorite_twice_round_trips_with_one_lookup() {
    let fx = fixture(MockTransport::default().json(LOOKUP_ENDPOINT, lookup_body("8", "Crumble")));
    assert_eq!(fx.session.toggle_favorite("8").await.unwrap(), FavoriteChange::Added);
    assert_eq!(fx.session.toggle_favorite("8").await.unwrap(), FavoriteChange::Removed);

    assert_eq!(fx.mock.call_count(), 1);
    assert!(fx.session.favorites().list().is_empty());
    assert_eq!(fx.durable.get(FAVORITES_KEY).as_deref(), Some("[]"));
}

#[tokio::test]
async fn add_favorite_is_deduplicated() {
    let fx = fixture(MockTransport::default().json(LOOKUP_ENDPOINT, lookup_body("3", "Flan")));
    assert!(fx.session.add_favorite("3").await.unwrap());
    assert!(!fx.session.add_favorite("3").await.unwrap());
    assert_eq!(fx.session.favorites().list().len(), 1);
}

#[test]
fn clear_all_wipes_both_scopes() {
    let fx = fixture(MockTransport::default());
    fx.session.favorites().add(recipe("1", "Pie")).unwrap();
    fx.session.toggle_theme().unwrap();
    fx.durable.set("unrelated", "x").unwrap();

    fx.session.clear_all().unwrap();

    assert_eq!(fx.durable.get(FAVORITES_KEY), None);
    assert_eq!(fx.durable.get("unrelated"), None);
    assert_eq!(fx.session_store.get(THEME_KEY), None);
    assert_eq!(fx.session.preferences().get_theme(), Theme::Light);
}
