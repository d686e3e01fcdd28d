//! Storage abstraction for itemhub items.
//!
//! Provides the [`ItemStore`] trait defining the CRUD contract for the item
//! collection, plus [`InMemoryStore`], the process-lifetime backend used by
//! the HTTP server.
//!
//! # Modules
//!
//! - [`error`]: StoreError for store operations, ParseIdPolicyError for
//!   policy names
//! - [`types`]: ItemId, Item and IdPolicy
//! - [`traits`]: ItemStore trait definition
//! - [`memory`]: InMemoryStore implementation

pub mod error;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::{ParseIdPolicyError, StoreError};
pub use memory::InMemoryStore;
pub use traits::ItemStore;
pub use types::{IdPolicy, Item, ItemId};
