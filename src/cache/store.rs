use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use tracing::debug;

use super::keys::CacheKey;

/// Entry lifetime when `set` is called without an explicit TTL.
pub const DEFAULT_TTL_SECONDS: i64 = 3600;

/// One cached answer. Owned exclusively by the cache map; callers only ever
/// see cloned values.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub stored_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// In-memory, TTL-based response cache, safe to share across concurrent
/// request handlers.
///
/// An expired entry reads as absent whether or not a sweep has removed it
/// yet; duplicate computation when two requests race on the same key is
/// acceptable. The lock is held only for the duration of a single map
/// operation.
#[derive(Debug)]
pub struct ResponseCache<T> {
    entries: RwLock<HashMap<CacheKey, CacheEntry<T>>>,
    default_ttl: Duration,
}

impl<T: Clone> ResponseCache<T> {
    pub fn new() -> Self {
        Self::with_default_ttl(Duration::seconds(DEFAULT_TTL_SECONDS))
    }

    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<T> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.is_expired(Utc::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    pub fn set(&self, key: CacheKey, value: T) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    pub fn set_with_ttl(&self, key: CacheKey, value: T, ttl: Duration) {
        let stored_at = Utc::now();
        let entry = CacheEntry {
            value,
            stored_at,
            expires_at: stored_at + ttl,
        };
        self.entries.write().insert(key, entry);
    }

    pub fn delete(&self, key: &CacheKey) -> bool {
        self.entries.write().remove(key).is_some()
    }

    /// Sweep out every expired entry.
    ///
    /// Meant to run on a periodic caller-side timer (every few minutes) so
    /// keys that are never re-read still get reclaimed. Returns the number of
    /// entries removed.
    pub fn cleanup(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed, remaining = entries.len(), "swept expired cache entries");
        }
        removed
    }

    /// Number of entries currently held, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<T: Clone> Default for ResponseCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
