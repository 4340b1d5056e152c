//! # Cart
//!
//! Quantity-per-item container with stock-bounded increments.
//!
//! ## Invariants
//! - An item with quantity 0 is never present as a key (absence ≡ zero).
//! - For every line, `0 < quantity ≤ snapshot.stock`, where the snapshot is
//!   the `Item` passed to the last successful [`Cart::add`]. Stale stock
//!   after a catalog refetch is a known limitation, not silently corrected.
//! - Lines key on the item id alone, so differing snapshots of one listing
//!   always land on the same line.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Item;

/// A line in the cart.
///
/// `item` is a frozen snapshot of the listing as of the last successful add.
/// The displayed name and price stay consistent even if the catalog entry is
/// refetched with different data while the line sits in the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Listing snapshot as of the last successful add.
    pub item: Item,

    /// Units in the cart. Always positive.
    pub quantity: u32,

    /// When this line first entered the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// The line total (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Lines keyed by item id. BTreeMap keeps iteration deterministic.
    lines: BTreeMap<i64, CartLine>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of `item` to the cart.
    ///
    /// ## Behavior
    /// - Increments only while the current quantity is below `item.stock`;
    ///   at capacity the call is a no-op and returns `false`. The UI may
    ///   disable the control at capacity, but the bound holds here
    ///   regardless.
    /// - A successful add refreshes the stored snapshot to the `item`
    ///   passed in, so the stock bound tracks the most recent add.
    pub fn add(&mut self, item: &Item) -> bool {
        match self.lines.get_mut(&item.id) {
            Some(line) => {
                if line.quantity < item.stock {
                    line.item = item.clone();
                    line.quantity += 1;
                    true
                } else {
                    false
                }
            }
            None => {
                // Absent entries count as quantity 0 for the bound check.
                if item.stock == 0 {
                    return false;
                }
                self.lines.insert(
                    item.id,
                    CartLine {
                        item: item.clone(),
                        quantity: 1,
                        added_at: Utc::now(),
                    },
                );
                true
            }
        }
    }

    /// Removes one unit of `item` from the cart.
    ///
    /// A line reaching quantity 0 is deleted rather than retained. Returns
    /// `false` (no-op) when the item is absent.
    pub fn remove(&mut self, item: &Item) -> bool {
        match self.lines.get_mut(&item.id) {
            Some(line) => {
                line.quantity -= 1;
                if line.quantity == 0 {
                    self.lines.remove(&item.id);
                }
                true
            }
            None => false,
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Quantity currently held for `item`, 0 when absent.
    pub fn quantity_of(&self, item: &Item) -> u32 {
        self.lines.get(&item.id).map_or(0, |line| line.quantity)
    }

    /// Whether the cart holds any units of `item`.
    pub fn contains(&self, item: &Item) -> bool {
        self.lines.contains_key(&item.id)
    }

    /// The cart lines in id order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct items in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Sum of line totals, from the frozen snapshots.
    pub fn subtotal(&self) -> f64 {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
