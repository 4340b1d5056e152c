//! # Market Gateway
//!
//! The remote gateway trait and its HTTP implementation.
//!
//! ## Error Mapping
//! Every operation resolves to `Result<T, RemoteError>` using one rulebook:
//! - missing session token → [`RemoteError::MissingToken`], **before** any
//!   request is built;
//! - non-success HTTP status → [`RemoteError::Api`] with an
//!   operation-specific message prefix;
//! - connect/timeout/decode failures → [`RemoteError::Transport`];
//! - success status with a null body where a payload was promised →
//!   [`RemoteError::EmptyBody`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use tracing::{debug, error};

use stuma_core::{
    AuthSession, Credentials, Item, ItemDraft, PasswordChange, Profile, ProfileUpdate,
    Registration, RemoteError, ServerAck,
};

use crate::config::ClientConfig;
use crate::token::TokenStore;
use crate::wire::{AckBody, Envelope};

// =============================================================================
// Gateway Trait
// =============================================================================

/// Remote operations consumed by the state managers.
///
/// Object-safe so managers hold `Arc<dyn MarketGateway>` and tests inject
/// scripted doubles instead of a live backend.
#[async_trait]
pub trait MarketGateway: Send + Sync {
    /// `GET /api/items`: the full catalog. Requires auth.
    async fn fetch_items(&self) -> Result<Vec<Item>, RemoteError>;

    /// `POST /api/items`: create a listing from the sell flow. Requires auth.
    async fn create_item(&self, draft: &ItemDraft) -> Result<(), RemoteError>;

    /// `POST /api/auth/login`: authenticate and persist the session token.
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, RemoteError>;

    /// `POST /api/auth/register`: create an account.
    async fn register(&self, registration: &Registration) -> Result<ServerAck, RemoteError>;

    /// `POST /api/profile/change-password`. Requires auth.
    async fn change_password(&self, change: &PasswordChange) -> Result<ServerAck, RemoteError>;

    /// `GET /api/profile`: the authenticated user's profile. Requires auth.
    async fn fetch_profile(&self) -> Result<Profile, RemoteError>;

    /// `PUT /api/profile`: update the editable profile fields. Requires auth.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<ServerAck, RemoteError>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// `MarketGateway` over the marketplace REST backend.
pub struct HttpGateway {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
}

impl HttpGateway {
    /// Creates a gateway over the given backend and token store.
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("stuma/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        HttpGateway {
            http,
            config,
            tokens,
        }
    }

    /// The `Authorization` header value, or `MissingToken` when the user
    /// must re-authenticate. Called before any request is built.
    fn bearer(&self) -> Result<String, RemoteError> {
        match self.tokens.get() {
            Some(token) => Ok(format!("Bearer {token}")),
            None => {
                error!("no session token in store");
                Err(RemoteError::MissingToken)
            }
        }
    }
}

/// Maps a non-success status to the user-visible rejection message.
fn api_error(context: &str, status: StatusCode) -> RemoteError {
    let reason = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string());

    RemoteError::Api {
        status: status.as_u16(),
        message: format!("{context}: {reason}"),
    }
}

#[async_trait]
impl MarketGateway for HttpGateway {
    async fn fetch_items(&self) -> Result<Vec<Item>, RemoteError> {
        let auth = self.bearer()?;
        let url = self.config.endpoint("api/items");
        debug!(url = %url, "fetching items");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(RemoteError::transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "item fetch rejected");
            return Err(api_error("Failed to fetch items", status));
        }

        let envelope: Option<Envelope<Vec<Item>>> =
            response.json().await.map_err(RemoteError::transport)?;
        let items = envelope
            .and_then(|envelope| envelope.data)
            .ok_or(RemoteError::EmptyBody)?;

        debug!(count = items.len(), "fetched items");
        Ok(items)
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<(), RemoteError> {
        let auth = self.bearer()?;
        let url = self.config.endpoint("api/items");
        debug!(name = %draft.name, "creating listing");

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, auth)
            .json(draft)
            .send()
            .await
            .map_err(RemoteError::transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "listing creation rejected");
            return Err(api_error("Failed to add item", status));
        }

        debug!("listing created");
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, RemoteError> {
        let url = self.config.endpoint("api/auth/login");
        debug!(email = %credentials.email, "logging in");

        let response = self
            .http
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(RemoteError::transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "login rejected");
            return Err(api_error("Login failed", status));
        }

        let session: Option<AuthSession> =
            response.json().await.map_err(RemoteError::transport)?;
        let session = session.ok_or(RemoteError::EmptyBody)?;

        self.tokens.save(session.token.clone());
        debug!("session token stored");
        Ok(session)
    }

    async fn register(&self, registration: &Registration) -> Result<ServerAck, RemoteError> {
        let url = self.config.endpoint("api/auth/register");
        debug!(email = %registration.email, "registering account");

        let response = self
            .http
            .post(url)
            .json(registration)
            .send()
            .await
            .map_err(RemoteError::transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "registration rejected");
            return Err(api_error("Registration failed", status));
        }

        let ack: Option<AckBody> = response.json().await.map_err(RemoteError::transport)?;
        ack.map(AckBody::into_ack).ok_or(RemoteError::EmptyBody)
    }

    async fn change_password(&self, change: &PasswordChange) -> Result<ServerAck, RemoteError> {
        let auth = self.bearer()?;
        let url = self.config.endpoint("api/profile/change-password");
        debug!("changing password");

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, auth)
            .json(change)
            .send()
            .await
            .map_err(RemoteError::transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "password change rejected");
            return Err(api_error("Failed to change password", status));
        }

        let ack: Option<AckBody> = response.json().await.map_err(RemoteError::transport)?;
        ack.map(AckBody::into_ack).ok_or(RemoteError::EmptyBody)
    }

    async fn fetch_profile(&self) -> Result<Profile, RemoteError> {
        let auth = self.bearer()?;
        let url = self.config.endpoint("api/profile");
        debug!(url = %url, "fetching profile");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(RemoteError::transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "profile fetch rejected");
            return Err(api_error("Failed to fetch profile", status));
        }

        let profile: Option<Profile> = response.json().await.map_err(RemoteError::transport)?;
        profile.ok_or(RemoteError::EmptyBody)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<ServerAck, RemoteError> {
        let auth = self.bearer()?;
        let url = self.config.endpoint("api/profile");
        debug!("updating profile");

        let response = self
            .http
            .put(url)
            .header(AUTHORIZATION, auth)
            .json(update)
            .send()
            .await
            .map_err(RemoteError::transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "profile update rejected");
            return Err(api_error("Failed to update profile", status));
        }

        let ack: Option<AckBody> = response.json().await.map_err(RemoteError::transport)?;
        ack.map(AckBody::into_ack).ok_or(RemoteError::EmptyBody)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MemoryTokenStore;

    fn gateway_without_token() -> HttpGateway {
        HttpGateway::new(ClientConfig::default(), Arc::new(MemoryTokenStore::new()))
    }

    #[test]
    fn test_api_error_message() {
        let err = api_error("Failed to fetch items", StatusCode::UNAUTHORIZED);
        assert_eq!(
            err,
            RemoteError::Api {
                status: 401,
                message: "Failed to fetch items: Unauthorized".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_items_without_token_never_hits_network() {
        // No token stored: the call must fail before any request is issued.
        // A transport error would surface here if a request were attempted.
        let gateway = gateway_without_token();
        let err = gateway.fetch_items().await.unwrap_err();

        assert_eq!(err, RemoteError::MissingToken);
        assert_eq!(err.to_string(), "No token found. Please log in again.");
    }

    #[tokio::test]
    async fn test_authorized_calls_share_the_preflight_check() {
        let gateway = gateway_without_token();

        let draft = ItemDraft {
            name: "Desk".to_string(),
            category: "Furniture".to_string(),
            description: String::new(),
            stock: 1,
            price: 500_000.0,
        };
        assert_eq!(
            gateway.create_item(&draft).await.unwrap_err(),
            RemoteError::MissingToken
        );

        assert_eq!(
            gateway.fetch_profile().await.unwrap_err(),
            RemoteError::MissingToken
        );

        let update = ProfileUpdate {
            name: "Budi".to_string(),
            phone: "0812000111".to_string(),
            address: "Jl. Melati 5".to_string(),
        };
        assert_eq!(
            gateway.update_profile(&update).await.unwrap_err(),
            RemoteError::MissingToken
        );

        let change = PasswordChange {
            email: "budi@campus.ac.id".to_string(),
            old_password: "old-secret".to_string(),
            new_password: "new-secret".to_string(),
        };
        assert_eq!(
            gateway.change_password(&change).await.unwrap_err(),
            RemoteError::MissingToken
        );
    }
}
