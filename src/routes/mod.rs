pub mod debug;
pub mod import;
pub mod locations;
pub mod optimize;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/batches/optimize", post(optimize::optimize_batch))
        .route("/batches/import", post(import::import_batch))
        .route("/batches/geojson", post(optimize::batch_geojson))
        .route("/locations", get(locations::list_locations))
        .route("/locations/resolve", get(locations::resolve_location))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
