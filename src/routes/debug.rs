use crate::services::gazetteer;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    status["checks"]["gazetteer_locations"] = json!(gazetteer::location_count());

    let fleet = state.optimizer.fleet();
    status["checks"]["fleet_size"] = json!(fleet.len());
    if fleet.is_empty() {
        status["status"] = json!("degraded");
    }

    match state.cache {
        Some(ref cache) => {
            status["checks"]["cache"] = json!({
                "backend": cache.backend_name(),
                "stats": cache.get_stats().await,
            });
        }
        None => {
            status["checks"]["cache"] = json!("disabled");
        }
    }

    Json(status)
}
