use batchroute::cache::{MemoryCacheService, ResultCache};
use batchroute::config::OptimizerConfig;
use batchroute::models::Shipment;
use batchroute::services::optimizer::{BatchOptimizer, SequentialIds};
use batchroute::AppState;
use std::sync::Arc;

/// Optimizer with default tunables and predictable `prefix-N` ids
#[allow(dead_code)]
pub fn test_optimizer() -> BatchOptimizer {
    BatchOptimizer::new(OptimizerConfig::default()).with_id_generator(Arc::new(SequentialIds::new()))
}

/// Application state backed by an in-memory cache
#[allow(dead_code)]
pub fn test_state(with_cache: bool) -> Arc<AppState> {
    let cache: Option<Arc<dyn ResultCache>> = if with_cache {
        Some(Arc::new(MemoryCacheService::new(3600, 100)))
    } else {
        None
    };

    Arc::new(AppState {
        optimizer: Arc::new(test_optimizer()),
        cache,
    })
}

/// Create a test shipment without dimensions
#[allow(dead_code)]
pub fn create_test_shipment(id: &str, origin: &str, destination: &str, weight: f64) -> Shipment {
    Shipment::new(id, origin, destination, weight, "")
}

/// Los Angeles -> New York (450 kg) and New York -> London (1200 kg)
#[allow(dead_code)]
pub fn transatlantic_batch() -> Vec<Shipment> {
    vec![
        create_test_shipment("ship-la-ny", "Los Angeles, USA", "New York, USA", 450.0),
        create_test_shipment("ship-ny-lon", "New York, USA", "London, UK", 1200.0),
    ]
}

/// Mixed European batch touching several regions and origins
#[allow(dead_code)]
pub fn european_batch() -> Vec<Shipment> {
    vec![
        create_test_shipment("eu-1", "Paris, France", "Berlin, Germany", 300.0),
        create_test_shipment("eu-2", "Rome, Italy", "Berlin, Germany", 120.0),
        create_test_shipment("eu-3", "Paris, France", "Frankfurt, Germany", 80.0),
        create_test_shipment("eu-4", "Berlin, Germany", "Paris, France", 500.0),
        create_test_shipment("eu-5", "Madrid, Spain", "London, UK", 60.0),
    ]
}

#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
