use crate::error::{AppError, Result};
use crate::models::Coordinates;
use crate::services::gazetteer::{self, Continent};
use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ResolvedLocation {
    pub name: String,
    pub coordinates: Coordinates,
    pub continent: Continent,
}

/// GET /locations/resolve?name=...
pub async fn resolve_location(
    Query(params): Query<ResolveParams>,
) -> Result<Json<ResolvedLocation>> {
    let coordinates = gazetteer::resolve_coordinates(&params.name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown location: {}", params.name)))?;

    Ok(Json(ResolvedLocation {
        continent: gazetteer::continent_of(&params.name),
        name: params.name,
        coordinates,
    }))
}

/// GET /locations - Known location names in lookup order
pub async fn list_locations() -> Json<Vec<&'static str>> {
    Json(gazetteer::known_locations().collect())
}
