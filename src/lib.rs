//! # Inventory Store
//!
//! Tracks named item quantities in memory, persists them to a JSON file, and
//! reports low-stock items.
//!
//! ## Core Concepts
//!
//! - **Items**: a mapping from item id to signed quantity, kept in insertion order
//! - **Persistence**: the whole mapping is written to or read from one JSON object
//! - **Threshold scan**: items strictly below a cutoff, for reorder alerts
//!
//! ## Example
//!
//! ```no_run
//! use inventory_store::{ActivityLog, InventoryStore, RemoveOutcome};
//!
//! # fn main() -> inventory_store::Result<()> {
//! let mut store = InventoryStore::new();
//! let mut log = ActivityLog::new();
//!
//! store.add_logged("apple", 10, &mut log)?;
//! assert_eq!(store.remove("apple", 3)?, RemoveOutcome::Removed { remaining: 7 });
//! assert_eq!(store.remove("orange", 1)?, RemoveOutcome::Absent);
//!
//! store.save("inventory.json")?;
//! store.print_report()?;
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod error;
pub mod persistence;
pub mod store;
pub mod table;
pub mod types;

// Re-exports
pub use activity::ActivityLog;
pub use error::{Result, StoreError};
pub use persistence::DEFAULT_INVENTORY_FILE;
pub use store::{InventoryStore, StoreConfig, DEFAULT_LOW_STOCK_THRESHOLD, REPORT_HEADER};
pub use table::StockTable;
pub use types::*;
