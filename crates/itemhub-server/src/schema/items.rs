//! Item request/response types.
//!
//! Request bodies are not deserialized through the `Json` extractor: the
//! handlers need to decide existence before looking at the body, and every
//! malformed body must collapse into the same 400 response. [`NameRequest`]
//! performs that check explicitly on the raw bytes.

use itemhub_store::Item;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Body of `POST /api/items` and `PUT /api/items/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRequest {
    /// The requested item name. May be empty.
    pub name: String,
}

impl NameRequest {
    /// Parses a raw request body.
    ///
    /// Valid iff the body is a JSON object with a string `name`; any other
    /// key is ignored. Everything else is [`ApiError::InvalidInput`].
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidInput)?;
        let name = value
            .as_object()
            .and_then(|fields| fields.get("name"))
            .and_then(Value::as_str)
            .ok_or(ApiError::InvalidInput)?;
        Ok(NameRequest {
            name: name.to_string(),
        })
    }
}

/// Response for `GET /api/items`.
#[derive(Debug, Clone, Serialize)]
pub struct ItemListResponse {
    /// All current items in creation order.
    pub items: Vec<Item>,
}

/// Response for `GET /api/items/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub item: Item,
}

/// Response for create and update: a confirmation plus the resulting item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemChangedResponse {
    pub message: &'static str,
    pub item: Item,
}

impl ItemChangedResponse {
    pub fn created(item: Item) -> Self {
        ItemChangedResponse {
            message: "Item created",
            item,
        }
    }

    pub fn updated(item: Item) -> Self {
        ItemChangedResponse {
            message: "Item updated",
            item,
        }
    }
}

/// Response for `DELETE /api/items/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        MessageResponse {
            message: "Item deleted",
        }
    }
}
