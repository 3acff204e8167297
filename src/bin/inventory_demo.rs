//! Walks the inventory store through a short session: a few additions and
//! removals, a low-stock scan, a save/load round trip and a report.
//!
//! Usage: `inventory-demo [PATH]` (defaults to `inventory.json`).

use inventory_store::{ActivityLog, InventoryStore, Result, StoreConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut config = StoreConfig::default();
    if let Some(path) = std::env::args_os().nth(1) {
        config.path = PathBuf::from(path);
    }

    let mut store = InventoryStore::with_config(config);
    let mut log = ActivityLog::new();

    store.add_logged("apple", 10, &mut log)?;
    store.add_logged("banana", -2, &mut log)?;
    if let Err(e) = store.add_logged("", 10, &mut log) {
        tracing::warn!(error = %e, "skipped invalid addition");
    }
    store.remove("apple", 3)?;
    let outcome = store.remove("orange", 1)?;
    tracing::info!(?outcome, "removed orange");

    println!("Apple stock: {}", store.get_qty("apple")?);
    let low: Vec<String> = store.low_stock().into_iter().map(String::from).collect();
    println!("Low items: {:?}", low);

    store.save_default()?;
    store.load_default()?;
    store.print_report()?;

    for line in log.iter() {
        println!("{}", line);
    }

    Ok(())
}
