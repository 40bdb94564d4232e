//! In-memory cache of country summaries.
//!
//! A single `CountryCache` is created at startup and shared by handle with
//! every request. Reads take a shared lock and may run in parallel; writes
//! take the exclusive lock and swap in a fresh `Arc`, so a reader sees
//! either the previous summary or the new one, never a half-written value.
//!
//! Entries are never evicted or expired. A key is overwritten each time a
//! lookup for it goes upstream.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{CountryKey, CountrySummary};

/// Thread-safe map from normalized country key to summary.
#[derive(Debug, Clone, Default)]
pub struct CountryCache {
    entries: Arc<RwLock<HashMap<CountryKey, Arc<CountrySummary>>>>,
}

impl CountryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached summary.
    pub async fn get(&self, key: &CountryKey) -> Option<Arc<CountrySummary>> {
        let guard = self.entries.read().await;
        guard.get(key).cloned()
    }

    /// Store a summary, replacing any existing entry for `key`.
    ///
    /// Returns the shared handle that was stored.
    pub async fn set(&self, key: CountryKey, summary: CountrySummary) -> Arc<CountrySummary> {
        let summary = Arc::new(summary);
        let mut guard = self.entries.write().await;
        guard.insert(key, Arc::clone(&summary));
        summary
    }

    /// Number of cached countries.
    pub async fn len(&self) -> usize {
        let guard = self.entries.read().await;
        guard.len()
    }

    pub async fn is_empty(&self) -> bool {
        let guard = self.entries.read().await;
        guard.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> CountryKey {
        CountryKey::parse(s).unwrap()
    }

    fn summary(name: &str, population: u64) -> CountrySummary {
        CountrySummary::new(name, Some("Capital".into()), Some("$".into()), population)
    }

    #[tokio::test]
    async fn empty_cache_misses() {
        let cache = CountryCache::new();
        assert!(cache.get(&key("nope")).await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn set_then_get() {
        let cache = CountryCache::new();
        let india = summary("India", 1_417_492_000);

        cache.set(key("india"), india.clone()).await;

        let cached = cache.get(&key("india")).await.unwrap();
        assert_eq!(*cached, india);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let cache = CountryCache::new();
        cache.set(key("india"), summary("India", 1)).await;
        cache.set(key("india"), summary("India", 2)).await;

        let cached = cache.get(&key("india")).await.unwrap();
        assert_eq!(cached.population(), 2);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn overwrite_leaves_old_handles_intact() {
        let cache = CountryCache::new();
        let first = cache.set(key("peru"), summary("Peru", 1)).await;
        cache.set(key("peru"), summary("Peru", 2)).await;

        assert_eq!(first.population(), 1);
        assert_eq!(cache.get(&key("peru")).await.unwrap().population(), 2);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let cache = CountryCache::new();
        let handle = cache.clone();
        handle.set(key("chile"), summary("Chile", 3)).await;

        assert!(cache.get(&key("chile")).await.is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_writers_and_readers() {
        const WRITERS: u64 = 1000;
        const READERS: usize = 1000;

        let cache = CountryCache::new();
        let mut tasks = Vec::with_capacity(WRITERS as usize + READERS);

        for i in 0..WRITERS {
            let cache = cache.clone();
            tasks.push(tokio::spawn(async move {
                cache.set(key("key"), summary("Key", i)).await;
            }));
        }

        for _ in 0..READERS {
            let cache = cache.clone();
            tasks.push(tokio::spawn(async move {
                if let Some(found) = cache.get(&key("key")).await {
                    assert_eq!(found.name(), "Key");
                    assert_eq!(found.capital(), "Capital");
                    assert!(found.population() < WRITERS);
                }
            }));
        }

        for task in futures::future::join_all(tasks).await {
            task.unwrap();
        }

        assert_eq!(cache.len().await, 1);
        assert!(cache.get(&key("key")).await.unwrap().population() < WRITERS);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_distinct_keys() {
        let cache = CountryCache::new();
        let tasks: Vec<_> = (0..200u64)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    let k = key(&format!("country{i}"));
                    cache.set(k.clone(), summary("C", i)).await;
                    assert_eq!(cache.get(&k).await.unwrap().population(), i);
                })
            })
            .collect();

        for task in futures::future::join_all(tasks).await {
            task.unwrap();
        }

        assert_eq!(cache.len().await, 200);
    }
}
