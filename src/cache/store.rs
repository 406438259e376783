//! Response Cache Module
//!
//! URL-keyed store of decoded upstream payloads with per-entry expiry.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::stats::Counters;
use crate::cache::{CacheEntry, CacheStats};

// == Response Cache ==
/// Shared cache of upstream payloads keyed by fully-qualified request URL.
///
/// Lookups take the read lock and may run in parallel. Writes, deletes and
/// sweeps take the write lock. Expired entries are never served, whether or
/// not the sweep has reached them yet.
#[derive(Debug)]
pub struct ResponseCache<V> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// Hit/miss counters
    counters: Counters,
}

impl<V: Clone> ResponseCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            counters: Counters::default(),
        }
    }

    // == Get ==
    /// Returns a clone of the live value stored under `key`.
    ///
    /// An entry past its deadline counts as a miss but is left for the sweep.
    pub async fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.counters.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.counters.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = CacheEntry::new(value, ttl);
        self.entries.write().await.insert(key.into(), entry);
    }

    // == Delete ==
    /// Removes `key` unconditionally. Returns whether anything was stored.
    pub async fn delete(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    // == Get Or Fetch ==
    /// Returns the cached value, or runs `fetch` and caches its success.
    ///
    /// Check, fetch and store are separate steps: two callers missing on the
    /// same key at once both run `fetch` and the later store wins. Errors
    /// from `fetch` are returned as-is and nothing is cached.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, ttl: Duration, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key).await {
            return Ok(value);
        }

        let value = fetch().await?;
        self.set(key, value.clone(), ttl).await;
        Ok(value)
    }

    // == Sweep Expired ==
    /// Removes every entry whose deadline has passed.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed, remaining = entries.len(), "Swept expired cache entries");
        }
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total = self.entries.read().await.len();
        self.counters.snapshot(total)
    }

    // == Length ==
    /// Returns the number of stored entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<V: Clone> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
