use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unresolvable location: {0}")]
    UnresolvableLocation(String),

    #[error("Invalid shipment: {0}")]
    InvalidShipment(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Optimization failed: {0}")]
    Optimization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::UnresolvableLocation(ref e) => {
                tracing::warn!("Batch rejected, unresolvable location: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("Unresolvable location: {}", e),
                )
            }
            AppError::InvalidShipment(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::Csv(ref e) => {
                tracing::info!("Malformed CSV upload: {}", e);
                (StatusCode::BAD_REQUEST, format!("Malformed CSV: {}", e))
            }
            AppError::Optimization(ref e) => {
                tracing::error!("Optimization failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Optimization failed".to_string(),
                )
            }
            AppError::NotFound(ref e) => (StatusCode::NOT_FOUND, e.clone()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
