//! Liveness endpoint.

use axum::Json;

use crate::schema::health::HealthResponse;

/// Reports that the service is up.
///
/// `GET /api/health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
