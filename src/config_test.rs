use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.durable_store_path(), PathBuf::from(".recipebox/storage.json"));
}

#[test]
fn overrides_are_applied_and_trimmed() {
    let cfg = AppConfig::from_lookup(lookup(&[
        ("RECIPEBOX_API_BASE_URL", "http://localhost:9000/api/"),
        ("RECIPEBOX_DATA_DIR", "/tmp/rb"),
        ("RECIPEBOX_DEFAULT_CATEGORY", "Seafood"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:9000/api");
    assert_eq!(cfg.data_dir, PathBuf::from("/tmp/rb"));
    assert_eq!(cfg.default_category, "Seafood");
}

#[test]
fn empty_value_is_invalid_argument() {
    let err = AppConfig::from_lookup(lookup(&[("RECIPEBOX_API_BASE_URL", "  ")])).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("RECIPEBOX_API_BASE_URL"));
}

#[test]
fn validated_rejects_slash_only_base_url() {
    let cfg = AppConfig { api_base_url: "/".into(), ..AppConfig::default() };
    assert!(cfg.validated().is_err());
}
