//! HTTP/JSON API server for the itemhub item collection.
//!
//! Exposes a health endpoint and create/read/update/delete routes over an
//! in-memory [`itemhub_store::InMemoryStore`]. This crate contains the
//! server framework, API schema types, error handling, configuration and
//! route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod server;
pub mod state;
