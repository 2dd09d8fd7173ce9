//! Time-boxed local copy of the server profile.
//!
//! DESIGN
//! ======
//! The blob and its timestamp live under separate keys. An entry is fresh
//! while `now - stored_at < ttl`; anything else (missing timestamp, stale,
//! undecodable blob) is a miss and the next successful fetch overwrites both
//! keys.

#[cfg(test)]
#[path = "profile_cache_test.rs"]
mod profile_cache_test;

use std::time::Duration;

use crate::net::types::Profile;
use crate::util::storage::{KeyValueStore, PROFILE_CACHE_KEY, PROFILE_CACHE_TIME_KEY, StorageError, load_json, save_json};

/// Default cache lifetime.
pub const DEFAULT_PROFILE_TTL: Duration = Duration::from_secs(5 * 60);

/// Millisecond wall clock.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Browser `Date.now()` in the csr build, system time elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        #[cfg(feature = "csr")]
        {
            #[allow(clippy::cast_possible_truncation)]
            let now = js_sys::Date::now() as i64;
            now
        }
        #[cfg(not(feature = "csr"))]
        {
            use std::time::{SystemTime, UNIX_EPOCH};
            let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
                return 0;
            };
            i64::try_from(dur.as_millis()).unwrap_or(0)
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProfileCache<S, C> {
    store: S,
    clock: C,
    ttl: Duration,
}

impl<S: KeyValueStore, C: Clock> ProfileCache<S, C> {
    pub fn new(store: S, clock: C, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    fn ttl_ms(&self) -> i64 {
        i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX)
    }

    /// The cached profile, if present and younger than the TTL.
    pub fn fresh(&self) -> Option<Profile> {
        let stored_at = self.store.get(PROFILE_CACHE_TIME_KEY)?.trim().parse::<i64>().ok()?;
        let age = self.clock.now_ms().saturating_sub(stored_at);
        if age >= self.ttl_ms() {
            log::debug!("cached profile is stale ({age} ms old)");
            return None;
        }
        match load_json::<_, Profile>(&self.store, PROFILE_CACHE_KEY) {
            Ok(profile) => profile,
            Err(e) => {
                log::warn!("ignoring corrupt cached profile: {e}");
                None
            }
        }
    }

    /// Store `profile` with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if storage rejects either write.
    pub fn put(&self, profile: &Profile) -> Result<(), StorageError> {
        save_json(&self.store, PROFILE_CACHE_KEY, profile)?;
        self.store.set(PROFILE_CACHE_TIME_KEY, &self.clock.now_ms().to_string())
    }

    pub fn invalidate(&self) {
        self.store.remove(PROFILE_CACHE_KEY);
        self.store.remove(PROFILE_CACHE_TIME_KEY);
    }
}
