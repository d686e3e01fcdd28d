//! HTTP handler modules for the itemhub API.
//!
//! Handlers parse the request, acquire the store lock, delegate to
//! [`itemhub_store::ItemStore`], and return JSON responses.

pub mod health;
pub mod items;

use crate::error::ApiError;

/// Fallback for paths no route matches.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
