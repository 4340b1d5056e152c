//! # Token Store
//!
//! Opaque holder of the session credential. Every authorized gateway call
//! reads the token from here; only the login/logout flow writes it.
//!
//! The store is a trait so platform shells can plug in their secure storage
//! (keychain, encrypted preferences); [`MemoryTokenStore`] covers tests and
//! process-lifetime sessions.

use std::sync::RwLock;

/// Get/save/clear access to the session token.
pub trait TokenStore: Send + Sync {
    /// The stored token, or `None` when the user must (re-)authenticate.
    fn get(&self) -> Option<String>;

    /// Stores a token, replacing any previous one.
    fn save(&self, token: String);

    /// Forgets the stored token.
    fn clear(&self);
}

/// Process-lifetime in-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn save(&self, token: String) {
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    fn clear(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }
}
