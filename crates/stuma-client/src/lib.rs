//! # stuma-client: Remote Gateway for the StuMa Marketplace
//!
//! The network edge of the client. Everything that touches the wire lives
//! here; the state managers above only ever see `Result<T, RemoteError>`.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Remote Gateway Flow                              │
//! │                                                                         │
//! │  manager.fetch_items()                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MarketGateway (trait) ──────────► test double in unit tests            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HttpGateway                                                            │
//! │  1. token present?  ──no──► Err(MissingToken), network never touched    │
//! │  2. GET {base}/api/items, header "Authorization: Bearer <token>"        │
//! │  3. non-success status ────► Err(Api { status, message })               │
//! │  4. body decode error ─────► Err(Transport { message })                 │
//! │  5. data: null ────────────► Err(EmptyBody)                             │
//! │  6. data: [...] ───────────► Ok(Vec<Item>)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod gateway;
pub mod token;
pub mod wire;

pub use config::ClientConfig;
pub use gateway::{HttpGateway, MarketGateway};
pub use token::{MemoryTokenStore, TokenStore};
