//! Caller-owned activity log.
//!
//! The store never keeps a log of its own. Callers that want a human-readable
//! trail of additions pass an `ActivityLog` to `InventoryStore::add_logged`.

use crate::types::{ItemId, Quantity, Timestamp};

/// Ordered sequence of human-readable activity lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an addition as `<timestamp>: Added <qty> of <item>`.
    pub fn record_added(&mut self, at: Timestamp, item: &ItemId, quantity: Quantity) {
        self.entries
            .push(format!("{}: Added {} of {}", at, quantity, item));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
