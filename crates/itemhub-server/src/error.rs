//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce `{"error": "..."}` bodies with
//! the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use itemhub_store::StoreError;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Fixed human-readable message for the error kind.
    pub error: &'static str,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body absent, not a JSON object, or lacking a string `name` (400).
    #[error("Invalid request data")]
    InvalidInput,

    /// No current item has the requested id (404).
    #[error("Item not found")]
    NotFound,

    /// No route matches the request path (404).
    #[error("Not Found")]
    RouteNotFound,
}

impl ApiError {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidInput => "Invalid request data",
            ApiError::NotFound => "Item not found",
            ApiError::RouteNotFound => "Not Found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), "request rejected: {}", self);
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), axum::Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ItemNotFound(_) => ApiError::NotFound,
        }
    }
}
