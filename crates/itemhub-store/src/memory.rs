//! In-memory implementation of [`ItemStore`].
//!
//! [`InMemoryStore`] keeps items in a `Vec` in insertion order. Nothing is
//! persisted; the store lives exactly as long as the value that owns it.

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::traits::ItemStore;
use crate::types::{IdPolicy, Item, ItemId};

/// Ordered, process-lifetime item collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    policy: IdPolicy,
    /// Highest id handed out so far (0 before the first create).
    highest_issued: u64,
}

impl InMemoryStore {
    /// Creates an empty store using the default [`IdPolicy::Length`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store using the given id policy.
    pub fn with_policy(policy: IdPolicy) -> Self {
        InMemoryStore {
            items: Vec::new(),
            policy,
            highest_issued: 0,
        }
    }

    /// The id policy this store was built with.
    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Number of current items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn next_id(&self) -> ItemId {
        match self.policy {
            IdPolicy::Length => ItemId(self.items.len() as u64 + 1),
            IdPolicy::Monotonic => ItemId(self.highest_issued + 1),
        }
    }

    fn position(&self, id: ItemId) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))
    }
}

impl ItemStore for InMemoryStore {
    fn create(&mut self, name: &str) -> Item {
        let id = self.next_id();
        if self.items.iter().any(|item| item.id == id) {
            warn!(id = id.0, "assigned id collides with an existing item");
        }

        let item = Item {
            id,
            name: name.to_string(),
        };
        self.items.push(item.clone());
        self.highest_issued = self.highest_issued.max(id.0);
        debug!(id = id.0, name, "item created");
        item
    }

    fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn get(&self, id: ItemId) -> Result<Item, StoreError> {
        let idx = self.position(id)?;
        Ok(self.items[idx].clone())
    }

    fn update(&mut self, id: ItemId, name: &str) -> Result<Item, StoreError> {
        let idx = self.position(id)?;
        let item = &mut self.items[idx];
        item.name = name.to_string();
        debug!(id = id.0, name, "item updated");
        Ok(item.clone())
    }

    fn delete(&mut self, id: ItemId) -> Result<(), StoreError> {
        let idx = self.position(id)?;
        self.items.remove(idx);
        debug!(id = id.0, "item deleted");
        Ok(())
    }

    fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}
