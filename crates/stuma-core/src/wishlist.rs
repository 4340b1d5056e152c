//! # Wishlist
//!
//! Ordered, duplicate-free item collection. Presence is binary; there is no
//! quantity concept. Duplicates are detected via the id-only identity rule.

use serde::{Deserialize, Serialize};

use crate::types::Item;

/// The wishlist, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<Item>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist { items: Vec::new() }
    }

    /// Appends `item` unless an item with the same id is already present.
    /// Returns `false` on the duplicate no-op.
    pub fn add(&mut self, item: Item) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the entry matching `item`'s id. Returns `false` when absent.
    pub fn remove(&mut self, item: &Item) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing.id != item.id);
        self.items.len() != before
    }

    /// Whether an item with the same id is present.
    pub fn contains(&self, item: &Item) -> bool {
        self.items.iter().any(|existing| existing.id == item.id)
    }

    /// The wishlisted items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            category: "Stationery".to_string(),
            description: String::new(),
            stock: 4,
            price: 15_000.0,
            seller: "sari".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
            updated_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_add_rejects_duplicate_ids() {
        let mut wishlist = Wishlist::new();
        let pen = test_item(1, "Pen");
        // Different snapshot, same id.
        let renamed = test_item(1, "Fountain Pen");

        assert!(wishlist.add(pen));
        assert!(!wishlist.add(renamed));

        assert_eq!(wishlist.len(), 1);
        assert_eq!(wishlist.iter().next().unwrap().name, "Pen");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut wishlist = Wishlist::new();
        wishlist.add(test_item(2, "Notebook"));
        wishlist.add(test_item(1, "Pen"));

        let names: Vec<&str> = wishlist.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Notebook", "Pen"]);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut wishlist = Wishlist::new();
        let pen = test_item(1, "Pen");
        wishlist.add(pen.clone());

        assert!(wishlist.remove(&test_item(1, "whatever")));
        assert!(wishlist.is_empty());
        assert!(!wishlist.remove(&pen));
    }
}
