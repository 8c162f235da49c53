use crate::cache::{CacheStats, ResultCache};
use crate::summary::BatchOptimizationResult;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Finished batch results held in process memory, evicted by TTL and by
/// entry count. Stored behind `Arc`, so a hit clones only on the way out.
pub struct MemoryCacheService {
    results: Cache<String, Arc<BatchOptimizationResult>>,
    lookups: Lookups,
}

#[derive(Default)]
struct Lookups {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Lookups {
    fn record(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl MemoryCacheService {
    pub fn new(ttl_seconds: u64, max_entries: u64) -> Self {
        MemoryCacheService {
            results: Cache::builder()
                .time_to_live(Duration::from_secs(ttl_seconds))
                .max_capacity(max_entries)
                .build(),
            lookups: Lookups::default(),
        }
    }
}

#[async_trait]
impl ResultCache for MemoryCacheService {
    async fn get_cached_result(&self, key: &str) -> Option<BatchOptimizationResult> {
        let cached = self.results.get(key).await;
        self.lookups.record(cached.is_some());
        tracing::debug!(key, hit = cached.is_some(), "Batch result lookup");

        cached.map(|result| result.as_ref().clone())
    }

    async fn cache_result(&self, key: &str, result: &BatchOptimizationResult) {
        self.results
            .insert(key.to_string(), Arc::new(result.clone()))
            .await;
        tracing::debug!(key, routes = result.routes.len(), "Stored batch result");
    }

    async fn get_stats(&self) -> CacheStats {
        CacheStats::from_counts(
            self.lookups.hits.load(Ordering::Relaxed),
            self.lookups.misses.load(Ordering::Relaxed),
            self.results.entry_count(),
        )
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
