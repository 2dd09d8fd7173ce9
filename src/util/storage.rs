//! Browser `localStorage` access behind a small key-value seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drafts, the cached profile, and the session credential all live in the
//! same persistent store. Services take any [`KeyValueStore`] so they can be
//! driven by an in-memory store in tests; the browser build uses
//! [`LocalStorage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key holding the JSON draft of unsaved form fields.
pub const DRAFT_KEY: &str = "placementPortfolioData";
/// Storage key holding the cached server profile blob.
pub const PROFILE_CACHE_KEY: &str = "cachedProfile";
/// Storage key holding the cached profile's epoch-millis timestamp.
pub const PROFILE_CACHE_TIME_KEY: &str = "cachedProfileTime";
/// Storage key holding the bearer credential.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the signed-in role.
pub const ROLE_KEY: &str = "role";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("persistent storage is not available")]
    Unavailable,
    #[error("failed to write storage key {key}")]
    Write { key: String },
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the store is missing or rejects the write
    /// (for example when the browser quota is exhausted).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if encoding fails or the store rejects the write.
pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })?;
    store.set(key, &raw)
}

/// Read `key` and decode it as JSON.
///
/// `Ok(None)` means the key is absent; a present but undecodable value is
/// returned as the decode error so callers can decide how loud to be.
///
/// # Errors
///
/// Returns the `serde_json` error when the stored text is not valid JSON for `T`.
pub fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>, serde_json::Error>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key) {
        Some(raw) => serde_json::from_str(&raw).map(Some),
        None => Ok(None),
    }
}

/// Handle to the page's `window.localStorage`.
///
/// The handle is resolved on every call, so it is free to copy into event
/// handlers and Leptos context. Outside the browser build all reads miss and
/// all writes report [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::Write { key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
