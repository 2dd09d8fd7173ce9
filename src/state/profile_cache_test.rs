use serde_json::json;

use super::*;
use crate::test_support::{FixedClock, MemoryStore, profile};

const T0: i64 = 1_700_000_000_000;

fn cache(ttl: Duration) -> (MemoryStore, FixedClock, ProfileCache<MemoryStore, FixedClock>) {
    let store = MemoryStore::default();
    let clock = FixedClock::at(T0);
    (store.clone(), clock.clone(), ProfileCache::new(store, clock, ttl))
}

#[test]
fn empty_cache_misses() {
    let (_, _, cache) = cache(DEFAULT_PROFILE_TTL);
    assert_eq!(cache.fresh(), None);
}

#[test]
fn put_writes_blob_and_timestamp() {
    let (store, _, cache) = cache(DEFAULT_PROFILE_TTL);
    cache.put(&profile(json!({ "name": "Asha" }))).unwrap();
    assert_eq!(store.get(PROFILE_CACHE_KEY).as_deref(), Some(r#"{"name":"Asha"}"#));
    assert_eq!(store.get(PROFILE_CACHE_TIME_KEY), Some(T0.to_string()));
}

#[test]
fn fresh_until_ttl_elapses() {
    let (_, clock, cache) = cache(Duration::from_secs(300));
    let stored = profile(json!({ "name": "Asha" }));
    cache.put(&stored).unwrap();

    clock.advance(299_999);
    assert_eq!(cache.fresh(), Some(stored));
    clock.advance(1);
    assert_eq!(cache.fresh(), None);
}

#[test]
fn timestamp_in_future_counts_as_fresh() {
    let (store, _, cache) = cache(DEFAULT_PROFILE_TTL);
    cache.put(&profile(json!({ "name": "Asha" }))).unwrap();
    store.set(PROFILE_CACHE_TIME_KEY, &(T0 + 60_000).to_string()).unwrap();
    assert!(cache.fresh().is_some());
}

#[test]
fn missing_or_garbled_timestamp_misses() {
    let (store, _, cache) = cache(DEFAULT_PROFILE_TTL);
    cache.put(&profile(json!({ "name": "Asha" }))).unwrap();

    store.set(PROFILE_CACHE_TIME_KEY, "yesterday").unwrap();
    assert_eq!(cache.fresh(), None);
    store.remove(PROFILE_CACHE_TIME_KEY);
    assert_eq!(cache.fresh(), None);
}

#[test]
fn corrupt_blob_is_a_miss() {
    let (store, _, cache) = cache(DEFAULT_PROFILE_TTL);
    store.set(PROFILE_CACHE_KEY, "{broken").unwrap();
    store.set(PROFILE_CACHE_TIME_KEY, &T0.to_string()).unwrap();
    assert_eq!(cache.fresh(), None);
}

#[test]
fn invalidate_removes_both_keys() {
    let (store, _, cache) = cache(DEFAULT_PROFILE_TTL);
    cache.put(&profile(json!({ "name": "Asha" }))).unwrap();
    cache.invalidate();
    assert_eq!(store.len(), 0);
    assert_eq!(cache.fresh(), None);
}

#[test]
fn rejected_write_is_reported() {
    let (store, _, cache) = cache(DEFAULT_PROFILE_TTL);
    store.fail_writes(true);
    assert!(cache.put(&profile(json!({ "name": "Asha" }))).is_err());
}
