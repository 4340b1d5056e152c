//! # Cart State
//!
//! Watch-published wrapper over the core [`Cart`] container. The UI only
//! ever requests increments and decrements; the map itself never leaves the
//! manager's ownership.

use tokio::sync::watch;
use tracing::debug;

use stuma_core::{Cart, Item};

/// Cart state manager.
pub struct CartState {
    cart: watch::Sender<Cart>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState {
            cart: watch::channel(Cart::new()).0,
        }
    }

    /// Adds one unit of `item`, bounded by the item's stock. Returns `false`
    /// on the at-capacity no-op.
    pub fn add_to_cart(&self, item: &Item) -> bool {
        let mut added = false;
        self.cart.send_modify(|cart| added = cart.add(item));
        if !added {
            debug!(item_id = item.id, stock = item.stock, "add at capacity ignored");
        }
        added
    }

    /// Removes one unit of `item`; the entry disappears at quantity zero.
    /// Returns `false` when the item was absent.
    pub fn remove_from_cart(&self, item: &Item) -> bool {
        let mut removed = false;
        self.cart.send_modify(|cart| removed = cart.remove(item));
        removed
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&self) {
        debug!("cart cleared");
        self.cart.send_modify(|cart| cart.clear());
    }

    /// Quantity currently held for `item`, 0 when absent.
    pub fn quantity_of(&self, item: &Item) -> u32 {
        self.cart.borrow().quantity_of(item)
    }

    /// An owned snapshot of the cart.
    pub fn snapshot(&self) -> Cart {
        self.cart.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<Cart> {
        self.cart.subscribe()
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
