//! The fighter's backpack: a bounded bag of single-use items.

use crate::items::Item;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of items a backpack holds.
pub const CAPACITY: usize = 5;

/// Error type for backpack operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("the backpack is full")]
    Full,
    #[error("{0} - You don't have this item!")]
    NoSuchItem(String),
}

/// A bounded collection of consumable items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns `false` and leaves the backpack untouched when
    /// it already holds [`CAPACITY`] items.
    pub fn add(&mut self, item: Item) -> bool {
        if self.items.len() >= CAPACITY {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove and return the first item with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(index))
    }

    /// Borrow the first item with the given name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::find_item;

    fn potion() -> Item {
        find_item("Small Health Potion").unwrap()
    }

    #[test]
    fn test_capacity_is_five() {
        let mut backpack = Inventory::new();
        for _ in 0..CAPACITY {
            assert!(backpack.add(potion()));
        }
        assert_eq!(backpack.len(), 5);

        // The sixth add is rejected and changes nothing.
        assert!(!backpack.add(potion()));
        assert_eq!(backpack.len(), 5);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut backpack = Inventory::new();
        backpack.add(potion());
        backpack.add(potion());

        assert!(backpack.remove("Small Health Potion").is_some());
        assert_eq!(backpack.len(), 1);
        assert!(backpack.get("Small Health Potion").is_some());
    }

    #[test]
    fn test_remove_missing() {
        let mut backpack = Inventory::new();
        assert!(backpack.remove("Big Health Potion").is_none());
    }
}
