//! Core types for the inventory store.

use crate::error::{Result, StoreError};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Signed count of units held for an item.
///
/// Negative values are representable: adding a negative quantity is accepted
/// without a sign check.
pub type Quantity = i64;

/// Identifier for an inventory line (a name or code).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Build an identifier, rejecting the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(StoreError::InvalidItemId(id));
        }
        Ok(ItemId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self> {
        ItemId::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({:?})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a call to `remove` did to the mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Quantity was reduced and the item is still stocked.
    Removed { remaining: Quantity },

    /// Quantity dropped to zero or below and the item was deleted.
    /// `overshoot` is how far below zero the removal went (0 for an exact
    /// removal); that amount is discarded.
    Purged { overshoot: Quantity },

    /// The item was not present; nothing changed.
    Absent,
}

impl RemoveOutcome {
    /// Whether the item is gone from the mapping after the call.
    pub fn is_gone(&self) -> bool {
        !matches!(self, RemoveOutcome::Removed { .. })
    }
}

/// Local wall-clock time, used for activity log entries.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Local>);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        Timestamp(Local::now())
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S%.6f"))
    }
}

/// Store statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub item_count: u64,
    pub total_quantity: i128,
    pub low_stock_count: u64,
}
