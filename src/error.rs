//! Error types for the inventory store.

use crate::types::Quantity;
use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid item id: {0:?}")]
    InvalidItemId(String),

    #[error("Quantity overflow for {item}: {op} {quantity} with {current} in stock")]
    QuantityOverflow {
        item: String,
        op: &'static str,
        current: Quantity,
        quantity: Quantity,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl StoreError {
    /// Whether the error came from the filesystem rather than from the data.
    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            StoreError::Io(e.into())
        } else {
            StoreError::Deserialization(e.to_string())
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
