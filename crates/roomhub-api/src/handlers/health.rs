//! Health check and fallback handlers.

use axum::Json;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use roomhub_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

/// Fallback for unmatched routes.
pub async fn route_not_found(uri: Uri) -> Response {
    ApiError(
        AppError::not_found("Route not found")
            .with_details(serde_json::json!({ "path": uri.path() })),
    )
    .into_response()
}
