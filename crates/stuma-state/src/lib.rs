//! # stuma-state: Observable State Managers
//!
//! Maps asynchronous gateway outcomes into consistent, derived, observable
//! view state. This is the layer the presentation bindings subscribe to.
//!
//! ## Manager Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      State Manager Architecture                         │
//! │                                                                         │
//! │          ┌────────────────┬───────────────┬──────────────────┐          │
//! │          ▼                ▼               ▼                  ▼          │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ CatalogState │  │  CartState   │  │WishlistState │  │ AuthState  │  │
//! │  │              │  │              │  │              │  │ Profile    │  │
//! │  │ items        │  │ watch<Cart>  │  │ watch<Wish-  │  │ Sell       │  │
//! │  │ category     │  │              │  │   list>      │  │            │  │
//! │  │ query        │  │ stock-bound  │  │ no dupes     │  │ tri-state  │  │
//! │  │ filtered*    │  │ increments   │  │ by id        │  │ slots      │  │
//! │  └──────┬───────┘  └──────────────┘  └──────────────┘  └─────┬──────┘  │
//! │         │                                                    │         │
//! │         └──────────────────────┬─────────────────────────────┘         │
//! │                                ▼                                       │
//! │                    MarketGateway (stuma-client)                        │
//! │                                                                        │
//! │  * derived: recomputed synchronously whenever items, category, or      │
//! │    query changes; never mutated directly                               │
//! │                                                                        │
//! │  THREAD SAFETY:                                                        │
//! │  • every piece of state is a tokio watch channel (one subject each)    │
//! │  • compound transitions serialize behind a per-manager update mutex    │
//! │  • managers are independent; the only shared input is the token store  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No manager blocks another. Synchronous operations (filtering, cart and
//! wishlist edits) are atomic with respect to observers; overlapping fetches
//! resolve last-issued-wins via a generation guard.

mod auth;
mod cart;
mod catalog;
mod profile;
mod sell;
mod wishlist;

#[cfg(test)]
pub(crate) mod support;

pub use auth::AuthState;
pub use cart::CartState;
pub use catalog::CatalogState;
pub use profile::ProfileState;
pub use sell::SellState;
pub use wishlist::WishlistState;
