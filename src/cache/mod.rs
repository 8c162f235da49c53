pub mod memory;

use crate::models::Shipment;
use crate::summary::BatchOptimizationResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub use memory::MemoryCacheService;

/// Store for finished batch results, keyed by [`batch_cache_key`]
#[async_trait]
pub trait ResultCache: Send + Sync {
    async fn get_cached_result(&self, key: &str) -> Option<BatchOptimizationResult>;
    async fn cache_result(&self, key: &str, result: &BatchOptimizationResult);
    async fn get_stats(&self) -> CacheStats;
    fn backend_name(&self) -> &'static str;
}

/// Cache key for an ordered shipment list.
/// Key includes every field of every shipment; order matters since it drives
/// route order and ids.
pub fn batch_cache_key(shipments: &[Shipment]) -> String {
    let mut hasher = DefaultHasher::new();

    shipments.len().hash(&mut hasher);
    for shipment in shipments {
        shipment.id.hash(&mut hasher);
        shipment.origin.hash(&mut hasher);
        shipment.destination.hash(&mut hasher);
        shipment.weight.to_bits().hash(&mut hasher);
        shipment.dimensions.hash(&mut hasher);
        shipment.description.hash(&mut hasher);
        shipment.priority.hash(&mut hasher);
        shipment.deadline.hash(&mut hasher);
        shipment.fragile.hash(&mut hasher);
        shipment.hazardous.hash(&mut hasher);
        shipment
            .temperature
            .map(|t| (t.min.to_bits(), t.max.to_bits()))
            .hash(&mut hasher);
    }

    format!("batch:{:x}", hasher.finish())
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub entries: u64,
}

impl CacheStats {
    /// `hit_rate` is a percentage of lookups; 0 before the first lookup
    pub fn from_counts(hits: u64, misses: u64, entries: u64) -> Self {
        let lookups = hits + misses;
        let hit_rate = if lookups == 0 {
            0.0
        } else {
            hits as f64 * 100.0 / lookups as f64
        };

        CacheStats {
            hits,
            misses,
            hit_rate,
            entries,
        }
    }
}
