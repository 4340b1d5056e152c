//! # Profile State
//!
//! Tri-state slots for reading and updating the authenticated user's
//! profile.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error};

use stuma_client::MarketGateway;
use stuma_core::{Profile, ProfileUpdate, RemoteResult, ServerAck};

/// Profile state manager.
pub struct ProfileState {
    gateway: Arc<dyn MarketGateway>,
    profile: watch::Sender<Option<RemoteResult<Profile>>>,
    update: watch::Sender<Option<RemoteResult<ServerAck>>>,
}

impl ProfileState {
    pub fn new(gateway: Arc<dyn MarketGateway>) -> Self {
        ProfileState {
            gateway,
            profile: watch::channel(None).0,
            update: watch::channel(None).0,
        }
    }

    /// Fetches the profile through the gateway.
    pub async fn fetch_profile(&self) {
        self.profile.send_replace(Some(RemoteResult::Loading));
        debug!("fetching profile");

        let outcome = self.gateway.fetch_profile().await;
        if let Err(err) = &outcome {
            error!(error = %err, "profile fetch failed");
        }
        self.profile.send_replace(Some(outcome.into()));
    }

    /// Submits edited profile fields.
    pub async fn update_profile(&self, update: ProfileUpdate) {
        self.update.send_replace(Some(RemoteResult::Loading));
        debug!("updating profile");

        let outcome = self.gateway.update_profile(&update).await;
        if let Err(err) = &outcome {
            error!(error = %err, "profile update failed");
        }
        self.update.send_replace(Some(outcome.into()));
    }

    /// Returns both slots to absent, e.g. when leaving the profile screen.
    pub fn reset(&self) {
        debug!("profile state reset");
        self.profile.send_replace(None);
        self.update.send_replace(None);
    }

    // -------------------------------------------------------------------------
    // Snapshots & subscriptions
    // -------------------------------------------------------------------------

    pub fn profile_state(&self) -> Option<RemoteResult<Profile>> {
        self.profile.borrow().clone()
    }

    pub fn update_state(&self) -> Option<RemoteResult<ServerAck>> {
        self.update.borrow().clone()
    }

    pub fn watch_profile(&self) -> watch::Receiver<Option<RemoteResult<Profile>>> {
        self.profile.subscribe()
    }

    pub fn watch_update(&self) -> watch::Receiver<Option<RemoteResult<ServerAck>>> {
        self.update.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::FakeGateway;
    use stuma_core::RemoteError;

    fn profile() -> Profile {
        Profile {
            id: 7,
            name: "Budi".to_string(),
            phone: "0812000111".to_string(),
            address: "Jl. Melati 5".to_string(),
            email: "budi@campus.ac.id".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_profile_success() {
        let gateway = Arc::new(FakeGateway::new());
        gateway.push_profile(Ok(profile()));
        let state = ProfileState::new(gateway);

        state.fetch_profile().await;

        let fetched = state.profile_state().unwrap();
        assert_eq!(fetched.success().unwrap().name, "Budi");
    }

    #[tokio::test]
    async fn test_fetch_profile_without_token() {
        let gateway = Arc::new(FakeGateway::new());
        gateway.push_profile(Err(RemoteError::MissingToken));
        let state = ProfileState::new(gateway);

        state.fetch_profile().await;

        assert_eq!(
            state.profile_state().unwrap().error_message().as_deref(),
            Some("No token found. Please log in again.")
        );
    }

    #[tokio::test]
    async fn test_update_then_reset() {
        let gateway = Arc::new(FakeGateway::new());
        gateway.push_profile(Ok(profile()));
        gateway.push_profile_update(Ok(ServerAck {
            message: "profile updated".to_string(),
        }));
        let state = ProfileState::new(gateway);

        state.fetch_profile().await;
        state
            .update_profile(ProfileUpdate {
                name: "Budi S.".to_string(),
                phone: "0812000111".to_string(),
                address: "Jl. Melati 5".to_string(),
            })
            .await;

        assert!(state.update_state().unwrap().is_success());

        state.reset();
        assert!(state.profile_state().is_none());
        assert!(state.update_state().is_none());
    }
}
