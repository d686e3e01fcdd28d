//! Error types for itemhub-store.

use thiserror::Error;

use crate::types::ItemId;

/// Errors produced by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No current item carries the given id.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
}

/// An id policy name did not match any known policy.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown id policy: {0:?} (expected \"length\" or \"monotonic\")")]
pub struct ParseIdPolicyError(pub String);
