//! Insertion-ordered item table.
//!
//! Quantities live in a `Vec` so reports and scans follow insertion order,
//! with a position index for O(1) lookup by item id. The table is also the
//! unit of persistence: it serializes as a JSON object whose key order
//! matches the table order.

use crate::types::{ItemId, Quantity};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug, Default)]
pub struct StockTable {
    /// Entries in insertion order.
    entries: Vec<(ItemId, Quantity)>,

    /// Item id -> index into `entries`.
    positions: HashMap<ItemId, usize>,
}

impl StockTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.positions.contains_key(item)
    }

    pub fn get(&self, item: &str) -> Option<Quantity> {
        self.positions.get(item).map(|&pos| self.entries[pos].1)
    }

    /// Set the quantity for an item. A new item is appended at the end; an
    /// existing one keeps its position.
    pub fn set(&mut self, item: ItemId, quantity: Quantity) {
        match self.positions.get(item.as_str()) {
            Some(&pos) => self.entries[pos].1 = quantity,
            None => {
                self.positions.insert(item.clone(), self.entries.len());
                self.entries.push((item, quantity));
            }
        }
    }

    /// Overwrite the quantity of an item already in the table.
    ///
    /// Returns `false` if the item is absent.
    pub fn update(&mut self, item: &str, quantity: Quantity) -> bool {
        match self.positions.get(item) {
            Some(&pos) => {
                self.entries[pos].1 = quantity;
                true
            }
            None => false,
        }
    }

    /// Delete an item, returning the quantity it held.
    pub fn remove(&mut self, item: &str) -> Option<Quantity> {
        let pos = self.positions.remove(item)?;
        let (_, quantity) = self.entries.remove(pos);

        // Shift the index of everything that followed the removed entry
        for (i, (id, _)) in self.entries.iter().enumerate().skip(pos) {
            if let Some(p) = self.positions.get_mut(id.as_str()) {
                *p = i;
            }
        }

        Some(quantity)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, Quantity)> + '_ {
        self.entries.iter().map(|(id, qty)| (id, *qty))
    }
}

impl PartialEq for StockTable {
    /// Two tables are equal when they hold the same items with the same
    /// quantities in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for StockTable {}

impl FromIterator<(ItemId, Quantity)> for StockTable {
    fn from_iter<T: IntoIterator<Item = (ItemId, Quantity)>>(iter: T) -> Self {
        let mut table = StockTable::new();
        for (id, qty) in iter {
            table.set(id, qty);
        }
        table
    }
}

impl Serialize for StockTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, qty) in &self.entries {
            map.serialize_entry(id.as_str(), qty)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StockTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StockTableVisitor)
    }
}

struct StockTableVisitor;

impl<'de> Visitor<'de> for StockTableVisitor {
    type Value = StockTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping item ids to integer quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = StockTable::new();

        // Duplicate keys: the last value wins, the first position is kept
        while let Some((key, qty)) = access.next_entry::<String, Quantity>()? {
            let id = ItemId::new(key).map_err(|_| {
                <A::Error as de::Error>::invalid_value(
                    de::Unexpected::Str(""),
                    &"a non-empty item id",
                )
            })?;
            table.set(id, qty);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::new(s).unwrap()
    }

    #[test]
    fn test_set_preserves_position() {
        let mut table = StockTable::new();
        table.set(id("apple"), 1);
        table.set(id("banana"), 2);
        table.set(id("apple"), 5);

        let items: Vec<_> = table.iter().map(|(k, v)| (k.as_str(), v)).collect();
        assert_eq!(items, vec![("apple", 5), ("banana", 2)]);
    }

    #[test]
    fn test_remove_reindexes() {
        let mut table: StockTable = [(id("a"), 1), (id("b"), 2), (id("c"), 3)]
            .into_iter()
            .collect();

        assert_eq!(table.remove("a"), Some(1));
        assert_eq!(table.remove("a"), None);
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.get("c"), Some(3));
        assert!(table.update("c", 30));
        assert_eq!(table.get("c"), Some(30));

        table.set(id("a"), 9);
        let order: Vec<_> = table.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_serialize_in_table_order() {
        let table: StockTable = [(id("zebra"), 1), (id("apple"), -2)].into_iter().collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"zebra":1,"apple":-2}"#);
    }

    #[test]
    fn test_deserialize_keeps_file_order() {
        let table: StockTable = serde_json::from_str(r#"{"b": 2, "a": 1, "b": 7}"#).unwrap();
        let items: Vec<_> = table.iter().map(|(k, v)| (k.as_str(), v)).collect();
        assert_eq!(items, vec![("b", 7), ("a", 1)]);
    }

    #[test]
    fn test_deserialize_rejects_bad_content() {
        assert!(serde_json::from_str::<StockTable>(r#"[1, 2]"#).is_err());
        assert!(serde_json::from_str::<StockTable>(r#"{"a": 1.5}"#).is_err());
        assert!(serde_json::from_str::<StockTable>(r#"{"a": "ten"}"#).is_err());
        assert!(serde_json::from_str::<StockTable>(r#"{"": 1}"#).is_err());
    }
}
