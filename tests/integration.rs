//! Integration tests for the inventory store.

use inventory_store::{ActivityLog, InventoryStore, RemoveOutcome, StoreConfig, REPORT_HEADER};
use tempfile::TempDir;

fn test_store(dir: &TempDir) -> InventoryStore {
    InventoryStore::with_config(StoreConfig {
        path: dir.path().join("inventory.json"),
        ..Default::default()
    })
}

// --- Realistic Workflow Tests ---

#[test]
fn test_demo_session() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);

    store.add("apple", 10).unwrap();
    store.add("banana", -2).unwrap();
    store.remove("apple", 3).unwrap();

    assert_eq!(store.get_qty("apple").unwrap(), 7);
    // add does no sign validation
    assert_eq!(store.get_qty("banana").unwrap(), -2);

    assert_eq!(store.remove("orange", 1).unwrap(), RemoveOutcome::Absent);
    assert!(!store.contains("orange"));
    assert_eq!(store.len(), 2);

    assert_eq!(store.low_stock(), vec!["banana"]);
}

#[test]
fn test_restock_clears_low_stock_alert() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);

    store.add("pear", 3).unwrap();
    assert!(store.scan_below_threshold(5).iter().any(|id| id == "pear"));

    store.add("pear", 10).unwrap();
    assert!(!store.scan_below_threshold(5).iter().any(|id| id == "pear"));
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");

    let mut store = test_store(&dir);
    store.add("zucchini", 4).unwrap();
    store.add("apple", 12).unwrap();
    store.add("kiwi", -1).unwrap();
    store.save(&path).unwrap();

    let mut reloaded = test_store(&dir);
    reloaded.add("stale", 1).unwrap();
    reloaded.load(&path).unwrap();

    let before: Vec<_> = store.iter().map(|(id, q)| (id.clone(), q)).collect();
    let after: Vec<_> = reloaded.iter().map(|(id, q)| (id.clone(), q)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_saved_file_is_plain_json_object() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);
    store.add("apple", 7).unwrap();
    store.add("banana", -2).unwrap();
    store.save_default().unwrap();

    let content = std::fs::read_to_string(dir.path().join("inventory.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value, serde_json::json!({"apple": 7, "banana": -2}));
}

#[test]
fn test_load_hand_written_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, r#"{"widget": 2, "gadget": 40}"#).unwrap();

    let store = InventoryStore::open_or_create(StoreConfig {
        path,
        low_stock_threshold: 10,
    })
    .unwrap();

    assert_eq!(store.get_qty("gadget").unwrap(), 40);
    assert_eq!(store.low_stock(), vec!["widget"]);
}

#[test]
fn test_report_after_reload() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);
    let mut log = ActivityLog::new();

    store.add_logged("apple", 10, &mut log).unwrap();
    store.add_logged("banana", -2, &mut log).unwrap();
    store.remove("apple", 3).unwrap();
    store.save_default().unwrap();
    store.load_default().unwrap();

    let mut out = Vec::new();
    store.write_report(&mut out).unwrap();
    let report = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines, vec![REPORT_HEADER, "apple -> 7", "banana -> -2"]);

    let entries: Vec<&str> = log.iter().collect();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].ends_with(": Added 10 of apple"));
    assert!(entries[1].ends_with(": Added -2 of banana"));
}

#[test]
fn test_purged_item_reinserted_at_end() {
    let dir = TempDir::new().unwrap();
    let mut store = test_store(&dir);

    store.add("a", 1).unwrap();
    store.add("b", 1).unwrap();
    store.remove("a", 5).unwrap();
    store.add("a", 2).unwrap();

    let order: Vec<&str> = store.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(order, vec!["b", "a"]);
}
