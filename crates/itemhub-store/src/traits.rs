//! The [`ItemStore`] trait defining the storage contract for items.
//!
//! Every backend keeps items in insertion order and signals
//! [`StoreError::ItemNotFound`] for any id that matches no current item.
//! The trait is synchronous; callers that share a store across tasks wrap
//! it in a lock.

use crate::error::StoreError;
use crate::types::{Item, ItemId};

/// The storage contract for the item collection.
pub trait ItemStore {
    /// Appends a new item with the given name and returns it.
    ///
    /// The id is chosen by the backend's id policy.
    fn create(&mut self, name: &str) -> Item;

    /// Lists all current items in insertion order.
    fn list(&self) -> Vec<Item>;

    /// Returns the first item with the given id.
    fn get(&self, id: ItemId) -> Result<Item, StoreError>;

    /// Replaces the name of the first item with the given id.
    ///
    /// The id and the item's position in listing order are unchanged.
    fn update(&mut self, id: ItemId, name: &str) -> Result<Item, StoreError>;

    /// Removes the first item with the given id.
    fn delete(&mut self, id: ItemId) -> Result<(), StoreError>;

    /// Returns true if some current item carries the given id.
    fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_ok()
    }
}
