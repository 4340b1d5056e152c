//! # stuma-core: Pure Domain Logic for the StuMa Marketplace Client
//!
//! This crate is the **heart** of the StuMa client. It contains the domain
//! logic of the marketplace app as pure functions and containers with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       StuMa Client Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Presentation Layer                          │   │
//! │  │    Home ──► Detail ──► Cart ──► Wishlist ──► Sell ──► Profile  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ observes                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    stuma-state (managers)                       │   │
//! │  │    CatalogState, CartState, WishlistState, AuthState, ...      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stuma-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │   cart    │  │ wishlist  │  │   │
//! │  │   │   Item    │  │ filtering │  │   Cart    │  │ Wishlist  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  stuma-client (remote gateway)                  │   │
//! │  │              REST calls, token store, wire mapping              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Category, Profile, auth payloads)
//! - [`remote`] - Tri-state wrapper over asynchronous outcomes
//! - [`error`] - Remote failure taxonomy and validation errors
//! - [`cart`] - Stock-bounded quantity-per-item container
//! - [`wishlist`] - Ordered, duplicate-free item collection
//! - [`catalog`] - Pure category/search filtering over item snapshots
//! - [`pricing`] - Order total arithmetic and currency formatting
//! - [`validation`] - Input validation for the sell and registration flows

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod pricing;
pub mod remote;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stuma_core::Item` instead of
// `use stuma_core::types::Item`.

pub use cart::{Cart, CartLine};
pub use error::{RemoteError, ValidationError};
pub use remote::RemoteResult;
pub use types::*;
pub use wishlist::Wishlist;
