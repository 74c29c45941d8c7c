//! Caller-owned response cache with per-entry expiry
//!
//! Upstream fetchers keep responses keyed by request parameters. The cache is
//! a value the caller creates and passes around, never process-wide state.

use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default lifetime of a cached response
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Key/value store whose entries expire
pub trait ResponseCache<V> {
    /// The value stored under `key`, if present and not expired
    fn get(&mut self, key: &str) -> Option<V>;

    /// Store `value` under `key` for `ttl`
    fn put(&mut self, key: &str, value: V, ttl: Duration);
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Lookup counters of a [`TtlCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    /// Lookups of absent or expired keys
    pub misses: u64,
    pub entries: usize,
}

/// In-memory [`ResponseCache`]; expired entries are dropped on read
#[derive(Debug, Clone)]
pub struct TtlCache<V> {
    entries: HashMap<String, Entry<V>>,
    hits: u64,
    misses: u64,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }

    /// Number of stored entries, expired ones included until purged
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before - self.entries.len()
    }
}

impl<V: Clone> ResponseCache<V> for TtlCache<V> {
    fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                self.hits += 1;
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };
        self.misses += 1;
        if expired {
            debug!("cache entry '{}' expired", key);
            self.entries.remove(key);
        }
        None
    }

    fn put(&mut self, key: &str, value: V, ttl: Duration) {
        // An unrepresentable deadline means the entry never expires in practice
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .unwrap_or_else(|| now + DEFAULT_TTL * 365);
        self.entries
            .insert(key.to_string(), Entry { value, expires_at });
    }
}

/// Cache key `engine_k1=v1_k2=v2` with parameters sorted by name
pub fn cache_key<K, V>(engine: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut sorted: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_ref()))
        .collect();
    sorted.sort();

    let params_str = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("_");

    format!("{}_{}", engine, params_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_sorts_params() {
        let key = cache_key("google_news", &[("q", "acme"), ("gl", "es")]);
        assert_eq!(key, "google_news_gl=es_q=acme");
    }

    #[test]
    fn test_put_then_get() {
        let mut cache = TtlCache::new();
        cache.put("k", 42, DEFAULT_TTL);
        assert_eq!(cache.get("k"), Some(42));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let mut cache = TtlCache::new();
        cache.put("k", "v".to_string(), Duration::ZERO);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_stats_count_hits_and_misses() {
        let mut cache = TtlCache::new();
        assert_eq!(cache.stats(), CacheStats::default());

        cache.put("fresh", 1, DEFAULT_TTL);
        cache.put("stale", 2, Duration::ZERO);
        assert_eq!(cache.get("fresh"), Some(1));
        assert_eq!(cache.get("fresh"), Some(1));
        assert_eq!(cache.get("stale"), None);
        assert_eq!(cache.get("missing"), None);

        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 2,
                misses: 2,
                entries: 1,
            }
        );
    }
}
