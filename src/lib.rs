// Library exports for testing and reusability

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod summary;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use cache::ResultCache;
use services::optimizer::BatchOptimizer;
use std::sync::Arc;

pub struct AppState {
    pub optimizer: Arc<BatchOptimizer>,
    pub cache: Option<Arc<dyn ResultCache>>,
}
