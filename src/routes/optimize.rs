use crate::cache;
use crate::error::{AppError, Result};
use crate::models::route::OptimizeBatchRequest;
use crate::models::Shipment;
use crate::services::geojson_export::routes_to_geojson;
use crate::summary::BatchOptimizationResult;
use crate::AppState;
use axum::{extract::State, Json};
use geojson::FeatureCollection;
use std::sync::Arc;

/// POST /batches/optimize
/// Optimize a batch of shipments and summarise it against individual shipping
pub async fn optimize_batch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OptimizeBatchRequest>,
) -> Result<Json<BatchOptimizationResult>> {
    request.validate().map_err(AppError::InvalidShipment)?;

    tracing::info!(shipments = request.shipments.len(), "Batch optimization request");

    let result = run_batch(&state, request.shipments).await?;
    Ok(Json(result))
}

/// POST /batches/geojson
/// Optimize a batch and return its route segments as map features
pub async fn batch_geojson(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OptimizeBatchRequest>,
) -> Result<Json<FeatureCollection>> {
    request.validate().map_err(AppError::InvalidShipment)?;

    let result = run_batch(&state, request.shipments).await?;
    Ok(Json(routes_to_geojson(&result.routes)))
}

/// Optimize off the async runtime, going through the result cache if any.
/// An unresolvable location fails the whole batch.
pub(crate) async fn run_batch(
    state: &AppState,
    shipments: Vec<Shipment>,
) -> Result<BatchOptimizationResult> {
    let cache_key = cache::batch_cache_key(&shipments);

    // Check cache first
    if let Some(ref cache) = state.cache {
        if let Some(cached) = cache.get_cached_result(&cache_key).await {
            tracing::info!("Cache hit for batch: {} routes returned", cached.routes.len());
            return Ok(cached);
        }
    }

    let optimizer = state.optimizer.clone();
    let (shipments, routes) = tokio::task::spawn_blocking(move || {
        let routes = optimizer.optimize(&shipments);
        (shipments, routes)
    })
    .await
    .map_err(|e| AppError::Optimization(format!("optimizer task failed: {}", e)))?;

    let result =
        BatchOptimizationResult::compute(&shipments, routes?, state.optimizer.config());

    tracing::info!(
        routes = result.routes.len(),
        vehicles = result.total_vehicles,
        cost = result.total_cost,
        savings = result.cost_savings,
        "Batch optimized"
    );

    // Cache the results
    if let Some(ref cache) = state.cache {
        cache.cache_result(&cache_key, &result).await;
    }

    Ok(result)
}
