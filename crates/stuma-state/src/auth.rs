//! # Auth State
//!
//! Tri-state slots for the login, registration, and change-password flows.
//! Each slot is `None` until its operation is first triggered; the gateway
//! persists the session token on a successful login.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error};

use stuma_client::MarketGateway;
use stuma_core::validation::validate_registration;
use stuma_core::{AuthSession, Credentials, PasswordChange, Registration, RemoteResult, ServerAck};

/// Auth state manager.
pub struct AuthState {
    gateway: Arc<dyn MarketGateway>,
    login: watch::Sender<Option<RemoteResult<AuthSession>>>,
    register: watch::Sender<Option<RemoteResult<ServerAck>>>,
    change_password: watch::Sender<Option<RemoteResult<ServerAck>>>,
}

impl AuthState {
    pub fn new(gateway: Arc<dyn MarketGateway>) -> Self {
        AuthState {
            gateway,
            login: watch::channel(None).0,
            register: watch::channel(None).0,
            change_password: watch::channel(None).0,
        }
    }

    /// Authenticates with the backend. On success the gateway has already
    /// stored the session token.
    pub async fn login(&self, credentials: Credentials) {
        self.login.send_replace(Some(RemoteResult::Loading));
        debug!(email = %credentials.email, "login requested");

        let outcome = self.gateway.login(&credentials).await;
        if let Err(err) = &outcome {
            error!(error = %err, "login failed");
        }
        self.login.send_replace(Some(outcome.into()));
    }

    /// Submits the registration form. Locally-invalid forms fail without
    /// touching the network.
    pub async fn register(&self, registration: Registration) {
        self.register.send_replace(Some(RemoteResult::Loading));

        if let Err(err) = validate_registration(&registration) {
            error!(error = %err, "rejecting invalid registration");
            self.register
                .send_replace(Some(RemoteResult::Failure(err.into())));
            return;
        }

        debug!(email = %registration.email, "registration requested");
        let outcome = self.gateway.register(&registration).await;
        if let Err(err) = &outcome {
            error!(error = %err, "registration failed");
        }
        self.register.send_replace(Some(outcome.into()));
    }

    /// Requests a password change for the authenticated user.
    pub async fn change_password(&self, change: PasswordChange) {
        self.change_password
            .send_replace(Some(RemoteResult::Loading));
        debug!("password change requested");

        let outcome = self.gateway.change_password(&change).await;
        if let Err(err) = &outcome {
            error!(error = %err, "password change failed");
        }
        self.change_password.send_replace(Some(outcome.into()));
    }

    /// Returns the change-password slot to absent once the UI has consumed
    /// the outcome.
    pub fn reset_change_password(&self) {
        debug!("change-password state reset");
        self.change_password.send_replace(None);
    }

    // -------------------------------------------------------------------------
    // Snapshots & subscriptions
    // -------------------------------------------------------------------------

    pub fn login_state(&self) -> Option<RemoteResult<AuthSession>> {
        self.login.borrow().clone()
    }

    pub fn register_state(&self) -> Option<RemoteResult<ServerAck>> {
        self.register.borrow().clone()
    }

    pub fn change_password_state(&self) -> Option<RemoteResult<ServerAck>> {
        self.change_password.borrow().clone()
    }

    pub fn watch_login(&self) -> watch::Receiver<Option<RemoteResult<AuthSession>>> {
        self.login.subscribe()
    }

    pub fn watch_register(&self) -> watch::Receiver<Option<RemoteResult<ServerAck>>> {
        self.register.subscribe()
    }

    pub fn watch_change_password(&self) -> watch::Receiver<Option<RemoteResult<ServerAck>>> {
        self.change_password.subscribe()
    }
}
