//! Item collection handlers (list, create, get, update, delete).
//!
//! Single-item handlers resolve the id before reading the body, so a
//! missing item is reported as 404 even when the body is also invalid.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use itemhub_store::{ItemId, ItemStore};

use crate::error::ApiError;
use crate::schema::items::{
    ItemChangedResponse, ItemListResponse, ItemResponse, MessageResponse, NameRequest,
};
use crate::state::AppState;

/// Parses the `{id}` path segment.
///
/// Only unsigned decimal digits match; anything else is treated as an
/// unrouted path. A digit string too large for any assigned id names no
/// item, so it is reported as a missing item.
fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    raw.parse::<u64>().map(ItemId).map_err(|_| ApiError::NotFound)
}

/// Lists all items.
///
/// `GET /api/items`
pub async fn list_items(State(state): State<AppState>) -> Json<ItemListResponse> {
    let store = state.store.lock().await;
    Json(ItemListResponse {
        items: store.list(),
    })
}

/// Creates a new item.
///
/// `POST /api/items`
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ItemChangedResponse>), ApiError> {
    let req = NameRequest::from_body(&body)?;
    let mut store = state.store.lock().await;
    let item = store.create(&req.name);
    Ok((StatusCode::CREATED, Json(ItemChangedResponse::created(item))))
}

/// Returns a single item.
///
/// `GET /api/items/{id}`
pub async fn get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let id = parse_item_id(&raw_id)?;
    let store = state.store.lock().await;
    let item = store.get(id)?;
    Ok(Json(ItemResponse { item }))
}

/// Renames an existing item.
///
/// `PUT /api/items/{id}`
pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<ItemChangedResponse>, ApiError> {
    let id = parse_item_id(&raw_id)?;
    let mut store = state.store.lock().await;
    if !store.contains(id) {
        return Err(ApiError::NotFound);
    }
    let req = NameRequest::from_body(&body)?;
    let item = store.update(id, &req.name)?;
    Ok(Json(ItemChangedResponse::updated(item)))
}

/// Deletes an item.
///
/// `DELETE /api/items/{id}`
pub async fn delete_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_item_id(&raw_id)?;
    let mut store = state.store.lock().await;
    store.delete(id)?;
    Ok(Json(MessageResponse::deleted()))
}
