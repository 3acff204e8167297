//! JSON file codec for the item table.

use crate::error::{Result, StoreError};
use crate::table::StockTable;
use std::fs;
use std::path::Path;

/// Default inventory file name.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Read and parse a whole inventory file.
pub fn read_table(path: impl AsRef<Path>) -> Result<StockTable> {
    let content = fs::read_to_string(path.as_ref())?;
    let table = serde_json::from_str(&content)?;
    Ok(table)
}

/// Serialize the table and overwrite the file at `path`.
pub fn write_table(path: impl AsRef<Path>, table: &StockTable) -> Result<()> {
    let json = serde_json::to_string_pretty(table)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}
