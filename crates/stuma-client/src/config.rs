//! # Client Configuration
//!
//! Base-URL configuration for the remote gateway.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variable (`STUMA_BASE_URL`)
//! 2. Defaults (this file)
//!
//! Read-only after construction; the gateway clones what it needs.

use tracing::warn;
use url::Url;

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/";

/// Remote gateway configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the marketplace backend. Endpoint paths are joined
    /// onto this, so it should end with a trailing slash.
    pub base_url: Url,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL must parse"),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration from a base address.
    pub fn new(base_url: Url) -> Self {
        ClientConfig { base_url }
    }

    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STUMA_BASE_URL`: Override the backend address. Unparseable values
    ///   are ignored in favor of the default.
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();

        if let Ok(raw) = std::env::var("STUMA_BASE_URL") {
            match Url::parse(&raw) {
                Ok(base_url) => config.base_url = base_url,
                Err(err) => warn!(raw = %raw, error = %err, "ignoring invalid STUMA_BASE_URL"),
            }
        }

        config
    }

    /// Resolves an API path against the base address.
    pub fn endpoint(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .expect("endpoint path must be valid")
    }
}
