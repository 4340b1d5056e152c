//! # Catalog State
//!
//! Owns the authoritative item list, the active category filter, the active
//! search query, and the derived filtered view.
//!
//! ## Item State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        items state machine                              │
//! │                                                                         │
//! │   Absent ──► Loading ──► Success ⇄ Loading ──► (Success | Failure)      │
//! │                                                                         │
//! │  • Absent only before the first fetch                                  │
//! │  • Loading → Loading (overlapping fetches) is permitted; there is no   │
//! │    queue; a generation counter lets only the latest-issued fetch      │
//! │    publish its completion                                              │
//! │  • the derived filtered view is recomputed on every transition and on  │
//! │    every category/query change, always under the update mutex          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, error};

use stuma_client::MarketGateway;
use stuma_core::catalog::filter_items;
use stuma_core::{Category, Item, RemoteResult};

/// Catalog state manager.
///
/// Each piece of state is its own watch channel; subscribe to what the view
/// needs. Compound updates run behind one mutex so no observer ever reads a
/// stale derived view after a mutation returns.
pub struct CatalogState {
    gateway: Arc<dyn MarketGateway>,

    /// Serializes compound state transitions.
    update: Mutex<()>,

    /// Monotonic fetch counter; completions of superseded fetches are
    /// discarded instead of overwriting newer data.
    fetch_generation: AtomicU64,

    items: watch::Sender<Option<RemoteResult<Vec<Item>>>>,
    selected_category: watch::Sender<Category>,
    search_query: watch::Sender<String>,
    filtered: watch::Sender<Vec<Item>>,
}

impl CatalogState {
    /// Creates a manager over the given gateway. `items` starts absent,
    /// the category at `All`, the query empty, the filtered view empty.
    pub fn new(gateway: Arc<dyn MarketGateway>) -> Self {
        CatalogState {
            gateway,
            update: Mutex::new(()),
            fetch_generation: AtomicU64::new(0),
            items: watch::channel(None).0,
            selected_category: watch::channel(Category::All).0,
            search_query: watch::channel(String::new()).0,
            filtered: watch::channel(Vec::new()).0,
        }
    }

    /// Fetches the catalog through the gateway.
    ///
    /// ## Behavior
    /// - `Loading` is published synchronously, before the first suspension
    ///   point.
    /// - On completion the **current** category and query are reapplied, so
    ///   a refetch under an active filter never shows unfiltered results.
    /// - A fetch superseded by a newer one discards its completion.
    pub async fn fetch_items(&self) {
        let generation = self.fetch_generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let _update = self.update.lock().expect("catalog state lock poisoned");
            self.items.send_replace(Some(RemoteResult::Loading));
            self.recompute_filtered();
        }
        debug!(generation, "fetching catalog");

        let outcome = self.gateway.fetch_items().await;

        let _update = self.update.lock().expect("catalog state lock poisoned");
        if self.fetch_generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded catalog fetch");
            return;
        }

        match outcome {
            Ok(items) => {
                debug!(generation, count = items.len(), "catalog fetch succeeded");
                self.items.send_replace(Some(RemoteResult::Success(items)));
            }
            Err(err) => {
                error!(generation, error = %err, "catalog fetch failed");
                self.items.send_replace(Some(RemoteResult::Failure(err)));
            }
        }
        self.recompute_filtered();
    }

    /// Sets the category filter and recomputes the derived view from the
    /// last successful snapshot (empty when none exists yet). Leaves the
    /// search query untouched; both predicates stay in effect.
    pub fn filter_by_category(&self, category: Category) {
        let _update = self.update.lock().expect("catalog state lock poisoned");
        debug!(category = %category, "category filter changed");
        self.selected_category.send_replace(category);
        self.recompute_filtered();
    }

    /// Sets the search query and recomputes the derived view. The empty
    /// query is the identity filter.
    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        let _update = self.update.lock().expect("catalog state lock poisoned");
        debug!(query = %query, "search query changed");
        self.search_query.send_replace(query);
        self.recompute_filtered();
    }

    /// Looks an item up by id in the last successful snapshot. Ignores the
    /// filtered view. No side effects.
    pub fn item_by_id(&self, id: i64) -> Option<Item> {
        let items = self.items.borrow();
        items
            .as_ref()
            .and_then(RemoteResult::success)
            .and_then(|items| items.iter().find(|item| item.id == id).cloned())
    }

    /// Recomputes `filtered` from the current inputs. Must run under the
    /// update mutex.
    fn recompute_filtered(&self) {
        let snapshot = match &*self.items.borrow() {
            Some(RemoteResult::Success(items)) => items.clone(),
            _ => Vec::new(),
        };
        let category = *self.selected_category.borrow();
        let query = self.search_query.borrow().clone();
        self.filtered
            .send_replace(filter_items(&snapshot, category, &query));
    }

    // -------------------------------------------------------------------------
    // Snapshots & subscriptions
    // -------------------------------------------------------------------------

    /// Current item fetch state; `None` before the first fetch.
    pub fn items_state(&self) -> Option<RemoteResult<Vec<Item>>> {
        self.items.borrow().clone()
    }

    /// Current derived view.
    pub fn filtered_items(&self) -> Vec<Item> {
        self.filtered.borrow().clone()
    }

    /// Currently selected category filter.
    pub fn selected_category(&self) -> Category {
        *self.selected_category.borrow()
    }

    /// Current search query.
    pub fn search_query(&self) -> String {
        self.search_query.borrow().clone()
    }

    pub fn watch_items(&self) -> watch::Receiver<Option<RemoteResult<Vec<Item>>>> {
        self.items.subscribe()
    }

    pub fn watch_filtered(&self) -> watch::Receiver<Vec<Item>> {
        self.filtered.subscribe()
    }

    pub fn watch_selected_category(&self) -> watch::Receiver<Category> {
        self.selected_category.subscribe()
    }

    pub fn watch_search_query(&self) -> watch::Receiver<String> {
        self.search_query.subscribe()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
