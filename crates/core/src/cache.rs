//! Ephemeral query cache with per-entry expiry.
//!
//! A key-value cache used to avoid redundant backend fetches for read-mostly
//! dashboard widgets. Staleness up to the TTL is an accepted tradeoff; there
//! is no invalidation-on-write. Correctness must never depend on the cache
//! being available: every failure path degrades to a miss.
//!
//! The backing store and the clock are both injected so the same logic runs
//! against an in-memory store in tests with a manual clock, and against
//! whatever persistent store the host process provides in production.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Default time-to-live for cache entries: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Error raised by a [`CacheStore`] write (quota, I/O, ...).
///
/// The cache logs and swallows these; callers never see them.
#[derive(Debug, thiserror::Error)]
#[error("cache store write failed: {0}")]
pub struct CacheStoreError(pub String);

/// String-keyed persistent store backing the cache.
///
/// Implementations must be cheap to call from async contexts (no blocking
/// I/O on the hot path) and tolerant of concurrent access.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String) -> Result<(), CacheStoreError>;
    fn remove(&self, key: &str);
}

/// In-memory [`CacheStore`] used in production (process-lifetime cache) and
/// in tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("cache store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<(), CacheStoreError> {
        self.entries
            .lock()
            .expect("cache store lock poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .expect("cache store lock poisoned")
            .remove(key);
    }
}

/// Time source for expiry checks. Injected so tests can advance time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock [`Clock`] used in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now()
    }
}

/// Serialized shape of one cache entry: the payload plus its absolute expiry
/// instant (Unix milliseconds).
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    data: serde_json::Value,
    expires_at: i64,
}

/// TTL cache over an injected store and clock.
///
/// `get` after the expiry instant behaves as a miss and evicts the entry;
/// eviction is permanent, not re-checked.
pub struct QueryCache {
    store: Box<dyn CacheStore>,
    clock: Box<dyn Clock>,
    default_ttl: Duration,
}

impl QueryCache {
    /// Build a cache with the default 5-minute TTL.
    pub fn new(store: Box<dyn CacheStore>, clock: Box<dyn Clock>) -> Self {
        Self::with_default_ttl(store, clock, DEFAULT_TTL)
    }

    /// Build a cache with a custom default TTL.
    pub fn with_default_ttl(
        store: Box<dyn CacheStore>,
        clock: Box<dyn Clock>,
        default_ttl: Duration,
    ) -> Self {
        Self {
            store,
            clock,
            default_ttl,
        }
    }

    /// Store `data` under `key` with expiry `now + ttl` (default TTL when
    /// `ttl` is `None`).
    ///
    /// Serialization and store failures are logged and swallowed.
    pub fn set<T: Serialize>(&self, key: &str, data: &T, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let expires_at = self.clock.now().timestamp_millis() + ttl.as_millis() as i64;

        let data = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to serialize cache payload");
                return;
            }
        };

        let entry = CacheEntry { data, expires_at };
        let serialized = match serde_json::to_string(&entry) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to serialize cache entry");
                return;
            }
        };

        if let Err(err) = self.store.set(key, serialized) {
            tracing::warn!(key, error = %err, "Failed to store in cache");
        }
    }

    /// Return the cached payload for `key` if present and not expired.
    ///
    /// Expired or undeserializable entries are evicted and treated as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to parse cache entry, evicting");
                self.store.remove(key);
                return None;
            }
        };

        if self.clock.now().timestamp_millis() > entry.expires_at {
            self.store.remove(key);
            return None;
        }

        match serde_json::from_value(entry.data) {
            Ok(data) => Some(data),
            Err(err) => {
                tracing::warn!(key, error = %err, "Cached payload has unexpected shape, evicting");
                self.store.remove(key);
                None
            }
        }
    }

    /// Unconditionally evict `key`.
    pub fn invalidate(&self, key: &str) {
        self.store.remove(key);
    }
}

/// Cache key for a profile-detail lookup, keyed by whichever identifier the
/// status update carries (founder id or linkedin url).
pub fn profile_cache_key(identifier: &str) -> String {
    format!("profile_{identifier}")
}

/// Cache key for the recent-status-updates dashboard widget.
pub const RECENT_STATUS_UPDATES_KEY: &str = "recent_status_updates";

/// Cache key for the company/profile count widget.
pub const COMPANY_PROFILE_COUNTS_KEY: &str = "company_profile_counts";

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    use chrono::TimeZone;

    use super::*;

    /// Manually advanced clock for expiry tests.
    struct ManualClock {
        millis: Arc<AtomicI64>,
    }

    impl ManualClock {
        fn new() -> (Self, Arc<AtomicI64>) {
            let millis = Arc::new(AtomicI64::new(1_700_000_000_000));
            (
                Self {
                    millis: Arc::clone(&millis),
                },
                millis,
            )
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Timestamp {
            chrono::Utc
                .timestamp_millis_opt(self.millis.load(Ordering::SeqCst))
                .unwrap()
        }
    }

    /// Store that rejects all writes, for failure-path tests.
    struct FailingStore;

    impl CacheStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: String) -> Result<(), CacheStoreError> {
            Err(CacheStoreError("quota exceeded".into()))
        }
        fn remove(&self, _key: &str) {}
    }

    fn manual_cache() -> (QueryCache, Arc<AtomicI64>) {
        let (clock, handle) = ManualClock::new();
        let cache = QueryCache::new(Box::new(MemoryStore::new()), Box::new(clock));
        (cache, handle)
    }

    #[test]
    fn get_after_set_returns_value() {
        let (cache, _) = manual_cache();
        cache.set("k", &vec![1, 2, 3], None);
        assert_eq!(cache.get::<Vec<i32>>("k"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn expired_entry_is_a_miss_and_stays_evicted() {
        let (cache, clock) = manual_cache();
        cache.set("k", &"payload", Some(Duration::from_secs(60)));

        // Advance past the TTL.
        clock.fetch_add(61_000, Ordering::SeqCst);
        assert_eq!(cache.get::<String>("k"), None);

        // Roll time back before the original expiry: the entry must still be
        // gone. Eviction is permanent.
        clock.fetch_sub(61_000, Ordering::SeqCst);
        assert_eq!(cache.get::<String>("k"), None);
    }

    #[test]
    fn entry_survives_until_just_before_expiry() {
        let (cache, clock) = manual_cache();
        cache.set("k", &42u32, Some(Duration::from_secs(60)));

        clock.fetch_add(59_999, Ordering::SeqCst);
        assert_eq!(cache.get::<u32>("k"), Some(42));
    }

    #[test]
    fn custom_ttl_overrides_default() {
        let (cache, clock) = manual_cache();
        cache.set("short", &1u32, Some(Duration::from_secs(1)));
        cache.set("long", &2u32, None);

        clock.fetch_add(2_000, Ordering::SeqCst);
        assert_eq!(cache.get::<u32>("short"), None);
        assert_eq!(cache.get::<u32>("long"), Some(2));
    }

    #[test]
    fn invalidate_evicts_unconditionally() {
        let (cache, _) = manual_cache();
        cache.set("k", &"v", None);
        cache.invalidate("k");
        assert_eq!(cache.get::<String>("k"), None);
    }

    #[test]
    fn store_write_failure_degrades_to_miss() {
        let (clock, _) = ManualClock::new();
        let cache = QueryCache::new(Box::new(FailingStore), Box::new(clock));
        cache.set("k", &"v", None);
        assert_eq!(cache.get::<String>("k"), None);
    }

    #[test]
    fn corrupt_entry_is_evicted() {
        let (clock, _) = ManualClock::new();
        let store = MemoryStore::new();
        store.set("k", "not json".to_string()).unwrap();
        let cache = QueryCache::new(Box::new(store), Box::new(clock));

        assert_eq!(cache.get::<String>("k"), None);
        // A second read sees the eviction, not the corrupt payload again.
        assert_eq!(cache.get::<String>("k"), None);
    }

    #[test]
    fn shape_mismatch_is_evicted() {
        let (cache, _) = manual_cache();
        cache.set("k", &vec!["a", "b"], None);
        assert_eq!(cache.get::<u32>("k"), None);
        assert_eq!(cache.get::<Vec<String>>("k"), None);
    }

    #[test]
    fn profile_cache_key_uses_identifier() {
        assert_eq!(profile_cache_key("42"), "profile_42");
        assert_eq!(
            profile_cache_key("https://linkedin.com/in/jane"),
            "profile_https://linkedin.com/in/jane"
        );
    }
}
