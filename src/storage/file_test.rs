use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

fn temp_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir()
        .join(format!("recipebox-file-store-{}-{n}", std::process::id()))
        .join(name)
}

#[test]
fn missing_file_opens_empty() {
    let store = FileStore::open(temp_path("store.json")).unwrap();
    assert_eq!(store.get("favorites"), None);
    assert!(!store.path().exists());
}

#[test]
fn values_survive_reopen() {
    let path = temp_path("store.json");
    {
        let store = FileStore::open(&path).unwrap();
        store.set("favorites", "[]").unwrap();
        store.set("other", "x").unwrap();
    }
    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("favorites").as_deref(), Some("[]"));
    assert_eq!(reopened.get("other").as_deref(), Some("x"));
}

#[test]
fn remove_and_clear_persist() {
    let path = temp_path("store.json");
    let store = FileStore::open(&path).unwrap();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    store.remove("a").unwrap();
    assert_eq!(FileStore::open(&path).unwrap().get("a"), None);

    store.clear().unwrap();
    assert_eq!(FileStore::open(&path).unwrap().get("b"), None);
}

#[test]
fn corrupt_file_opens_empty_and_is_replaced() {
    let path = temp_path("store.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{not json").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("favorites"), None);

    store.set("favorites", "[]").unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.get("favorites").map(String::as_str), Some("[]"));
}

#[test]
fn failed_write_keeps_previous_state() {
    let path = temp_path("store.json");
    let store = FileStore::open(&path).unwrap();
    store.set("a", "1").unwrap();

    // A directory in place of the file makes the final rename fail.
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let err = store.set("favorites", "[]").unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
    assert_eq!(store.get("favorites"), None);
    assert_eq!(store.get("a").as_deref(), Some("1"));
}
