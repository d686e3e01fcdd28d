//! Item identity, the item record itself, and id-assignment policies.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseIdPolicyError;

/// Identifier assigned to an item at creation.
///
/// Serializes as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

/// A named item. `id` never changes after creation; `name` may.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

/// How [`InMemoryStore`](crate::InMemoryStore) picks the id of a new item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// `id = number of current items + 1`.
    ///
    /// Ids can repeat once items have been deleted: after creating 1 and 2
    /// and deleting 1, the next item is given id 2 again. Lookups then
    /// resolve to the earliest item carrying that id.
    #[default]
    Length,
    /// `id = highest id ever issued + 1`. Ids are never reused.
    Monotonic,
}

impl IdPolicy {
    /// The configuration name of this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            IdPolicy::Length => "length",
            IdPolicy::Monotonic => "monotonic",
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdPolicy {
    type Err = ParseIdPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(IdPolicy::Length),
            "monotonic" => Ok(IdPolicy::Monotonic),
            _ => Err(ParseIdPolicyError(s.to_string())),
        }
    }
}
