use crate::error::Result;
use crate::routes::optimize::run_batch;
use crate::services::shipment_import::{ShipmentImporter, ShipmentUploadResult};
use crate::summary::BatchOptimizationResult;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ImportParams {
    /// Report shipments with unknown locations as row errors instead of
    /// failing the whole batch
    #[serde(default)]
    pub skip_unresolvable: bool,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub upload: ShipmentUploadResult,
    pub result: BatchOptimizationResult,
}

/// POST /batches/import
/// Parse a CSV manifest and optimize the valid rows
pub async fn import_batch(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ImportParams>,
    body: Bytes,
) -> Result<Json<ImportResponse>> {
    let mut upload = ShipmentImporter::parse(&body[..])?;

    if params.skip_unresolvable {
        upload.reject_unresolvable();
    }

    tracing::info!(
        valid = upload.valid_count,
        invalid = upload.invalid_count,
        skip_unresolvable = params.skip_unresolvable,
        "CSV batch import"
    );

    let result = run_batch(&state, upload.shipments.clone()).await?;
    Ok(Json(ImportResponse { upload, result }))
}
