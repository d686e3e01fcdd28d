//! Health check response type.

use serde::Serialize;

/// Response for `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving.
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        HealthResponse { status: "healthy" }
    }
}
