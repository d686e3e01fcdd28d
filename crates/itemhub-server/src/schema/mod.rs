//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for a specific
//! API area. Types use serde derives for JSON serialization.

pub mod health;
pub mod items;
