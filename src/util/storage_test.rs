use super::*;
use crate::test_support::MemoryStore;

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStore::default();
    let value: Option<Vec<u8>> = load_json(&store, "absent").unwrap();
    assert!(value.is_none());
}

#[test]
fn save_then_load_json_uses_same_key() {
    let store = MemoryStore::default();
    save_json(&store, "k", &serde_json::json!({ "a": "b" })).unwrap();
    assert_eq!(store.get("k").as_deref(), Some(r#"{"a":"b"}"#));
    let value: Option<serde_json::Value> = load_json(&store, "k").unwrap();
    assert_eq!(value, Some(serde_json::json!({ "a": "b" })));
}

#[test]
fn load_json_reports_corrupt_value() {
    let store = MemoryStore::default();
    store.set("k", "{not json").unwrap();
    let result: Result<Option<serde_json::Value>, _> = load_json(&store, "k");
    assert!(result.is_err());
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_inert_outside_browser() {
    let store = LocalStorage;
    assert_eq!(store.get(DRAFT_KEY), None);
    assert!(matches!(store.set(DRAFT_KEY, "{}"), Err(StorageError::Unavailable)));
    store.remove(DRAFT_KEY);
}

#[test]
fn storage_keys_are_distinct() {
    let keys = [DRAFT_KEY, PROFILE_CACHE_KEY, PROFILE_CACHE_TIME_KEY, TOKEN_KEY, ROLE_KEY];
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
