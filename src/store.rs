//! The inventory store.

use crate::activity::ActivityLog;
use crate::error::{Result, StoreError};
use crate::persistence::{self, DEFAULT_INVENTORY_FILE};
use crate::table::StockTable;
use crate::types::{ItemId, Quantity, RemoveOutcome, StoreStats, Timestamp};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Header line written before the per-item report lines.
pub const REPORT_HEADER: &str = "Items Report";

/// Default cutoff for `low_stock`.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// File used by `load_default`, `save_default` and `open_or_create`.
    pub path: PathBuf,

    /// Items strictly below this quantity are reported by `low_stock`.
    pub low_stock_threshold: Quantity,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// In-memory mapping from item id to quantity, with JSON file persistence.
///
/// Items are kept in insertion order; reports and scans follow it.
#[derive(Clone, Debug, Default)]
pub struct InventoryStore {
    config: StoreConfig,
    items: StockTable,
}

impl InventoryStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            items: StockTable::new(),
        }
    }

    /// Load the configured file if it exists, otherwise start empty.
    pub fn open_or_create(config: StoreConfig) -> Result<Self> {
        let mut store = Self::with_config(config);
        if store.config.path.exists() {
            store.load_default()?;
        } else {
            debug!(
                path = %store.config.path.display(),
                "inventory file missing, starting empty"
            );
        }
        Ok(store)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // --- Mutation ---

    /// Add `quantity` units of `item`, creating it at zero if absent.
    ///
    /// No sign check is made: a negative quantity lowers the stock and may
    /// leave it negative. Returns the new quantity.
    pub fn add(&mut self, item: &str, quantity: Quantity) -> Result<Quantity> {
        self.add_inner(item, quantity, None)
    }

    /// Like `add`, and on success appends
    /// `<timestamp>: Added <qty> of <item>` to `log`.
    pub fn add_logged(
        &mut self,
        item: &str,
        quantity: Quantity,
        log: &mut ActivityLog,
    ) -> Result<Quantity> {
        self.add_inner(item, quantity, Some(log))
    }

    fn add_inner(
        &mut self,
        item: &str,
        quantity: Quantity,
        log: Option<&mut ActivityLog>,
    ) -> Result<Quantity> {
        let id = ItemId::new(item).map_err(|e| {
            warn!(quantity, "rejected add with empty item id");
            e
        })?;

        let current = self.items.get(item).unwrap_or(0);
        let updated = current
            .checked_add(quantity)
            .ok_or_else(|| StoreError::QuantityOverflow {
                item: item.to_string(),
                op: "add",
                current,
                quantity,
            })?;

        if let Some(log) = log {
            log.record_added(Timestamp::now(), &id, quantity);
        }
        self.items.set(id, updated);

        debug!(item, quantity, total = updated, "added stock");
        Ok(updated)
    }

    /// Remove `quantity` units of `item`.
    ///
    /// Removing an absent item is a no-op reported as `RemoveOutcome::Absent`.
    /// When the result is zero or below the item is deleted outright and the
    /// overshoot is discarded.
    pub fn remove(&mut self, item: &str, quantity: Quantity) -> Result<RemoveOutcome> {
        let Some(current) = self.items.get(item) else {
            debug!(item, quantity, "remove of absent item ignored");
            return Ok(RemoveOutcome::Absent);
        };

        let overflow = || StoreError::QuantityOverflow {
            item: item.to_string(),
            op: "remove",
            current,
            quantity,
        };
        let remaining = current.checked_sub(quantity).ok_or_else(overflow)?;

        if remaining <= 0 {
            // i64::MIN has no positive counterpart
            let overshoot = remaining.checked_neg().ok_or_else(overflow)?;
            self.items.remove(item);
            debug!(item, quantity, overshoot, "removed stock, item purged");
            Ok(RemoveOutcome::Purged { overshoot })
        } else {
            self.items.update(item, remaining);
            debug!(item, quantity, remaining, "removed stock");
            Ok(RemoveOutcome::Removed { remaining })
        }
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // --- Queries ---

    /// Quantity held for `item`.
    pub fn get_qty(&self, item: &str) -> Result<Quantity> {
        self.items
            .get(item)
            .ok_or_else(|| StoreError::ItemNotFound(item.to_string()))
    }

    /// Quantity held for `item`, if present.
    pub fn quantity(&self, item: &str) -> Option<Quantity> {
        self.items.get(item)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items and quantities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, Quantity)> + '_ {
        self.items.iter()
    }

    /// Items whose quantity is strictly below `threshold`, in insertion order.
    pub fn scan_below_threshold(&self, threshold: Quantity) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|&(_, qty)| qty < threshold)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// `scan_below_threshold` with the configured low-stock threshold.
    pub fn low_stock(&self) -> Vec<ItemId> {
        self.scan_below_threshold(self.config.low_stock_threshold)
    }

    pub fn stats(&self) -> StoreStats {
        let threshold = self.config.low_stock_threshold;
        let mut stats = StoreStats::default();
        for (_, qty) in self.items.iter() {
            stats.item_count += 1;
            stats.total_quantity += i128::from(qty);
            if qty < threshold {
                stats.low_stock_count += 1;
            }
        }
        stats
    }

    // --- Persistence ---

    /// Replace the whole mapping with the contents of the file at `path`.
    ///
    /// On failure the current mapping is left as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let table = persistence::read_table(path)?;
        info!(path = %path.display(), items = table.len(), "loaded inventory");
        self.items = table;
        Ok(())
    }

    /// Write the whole mapping to `path`, overwriting it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        persistence::write_table(path, &self.items)?;
        info!(path = %path.display(), items = self.items.len(), "saved inventory");
        Ok(())
    }

    /// `load` from the configured path.
    pub fn load_default(&mut self) -> Result<()> {
        let path = self.config.path.clone();
        self.load(path)
    }

    /// `save` to the configured path.
    pub fn save_default(&self) -> Result<()> {
        self.save(&self.config.path)
    }

    // --- Reporting ---

    /// Write the header line and one `<item> -> <quantity>` line per item.
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", REPORT_HEADER)?;
        for (id, qty) in self.items.iter() {
            writeln!(out, "{} -> {}", id, qty)?;
        }
        Ok(())
    }

    /// `write_report` to standard output.
    pub fn print_report(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
