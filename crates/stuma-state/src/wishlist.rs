//! # Wishlist State
//!
//! Watch-published wrapper over the core [`Wishlist`] collection.

use tokio::sync::watch;
use tracing::debug;

use stuma_core::{Item, Wishlist};

/// Wishlist state manager.
pub struct WishlistState {
    wishlist: watch::Sender<Wishlist>,
}

impl WishlistState {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        WishlistState {
            wishlist: watch::channel(Wishlist::new()).0,
        }
    }

    /// Appends `item` unless one with the same id is already present.
    /// Returns `false` on the duplicate no-op.
    pub fn add_to_wishlist(&self, item: Item) -> bool {
        let mut added = false;
        let item_id = item.id;
        self.wishlist
            .send_modify(|wishlist| added = wishlist.add(item));
        if !added {
            debug!(item_id, "duplicate wishlist add ignored");
        }
        added
    }

    /// Removes the entry matching `item`'s id. Returns `false` when absent.
    pub fn remove_from_wishlist(&self, item: &Item) -> bool {
        let mut removed = false;
        self.wishlist
            .send_modify(|wishlist| removed = wishlist.remove(item));
        removed
    }

    /// Whether an item with the same id is wishlisted.
    pub fn contains(&self, item: &Item) -> bool {
        self.wishlist.borrow().contains(item)
    }

    /// An owned snapshot of the wishlist.
    pub fn snapshot(&self) -> Wishlist {
        self.wishlist.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<Wishlist> {
        self.wishlist.subscribe()
    }
}

impl Default for WishlistState {
    fn default() -> Self {
        Self::new()
    }
}
