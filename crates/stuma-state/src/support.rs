//! Test support: a scripted, in-process gateway double.
//!
//! Outcomes are queued per operation ahead of the call; an unscripted call
//! panics the test. Item fetches can additionally be gated on a oneshot
//! channel to hold a fetch in flight while the test observes intermediate
//! state.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use stuma_client::MarketGateway;
use stuma_core::{
    AuthSession, Credentials, Item, ItemDraft, PasswordChange, Profile, ProfileUpdate,
    Registration, RemoteError, ServerAck,
};

/// Builds a minimal catalog item for tests.
pub(crate) fn sample_item(id: i64, name: &str, category: &str, stock: u32) -> Item {
    Item {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: format!("{name} in good condition"),
        stock,
        price: 500_000.0,
        seller: "sari".to_string(),
        created_at: "2024-05-01T10:00:00Z".to_string(),
        updated_at: "2024-05-01T10:00:00Z".to_string(),
    }
}

enum ItemsScript {
    Ready(Result<Vec<Item>, RemoteError>),
    Gated(oneshot::Receiver<Result<Vec<Item>, RemoteError>>),
}

/// Scripted `MarketGateway` double.
#[derive(Default)]
pub(crate) struct FakeGateway {
    items: Mutex<VecDeque<ItemsScript>>,
    logins: Mutex<VecDeque<Result<AuthSession, RemoteError>>>,
    registrations: Mutex<VecDeque<Result<ServerAck, RemoteError>>>,
    password_changes: Mutex<VecDeque<Result<ServerAck, RemoteError>>>,
    profiles: Mutex<VecDeque<Result<Profile, RemoteError>>>,
    profile_updates: Mutex<VecDeque<Result<ServerAck, RemoteError>>>,
    creations: Mutex<VecDeque<Result<(), RemoteError>>>,
    created: Mutex<Vec<ItemDraft>>,
    item_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_items(&self, outcome: Result<Vec<Item>, RemoteError>) {
        self.items
            .lock()
            .unwrap()
            .push_back(ItemsScript::Ready(outcome));
    }

    /// Queues a fetch that stays in flight until the returned sender fires.
    pub fn gate_items(&self) -> oneshot::Sender<Result<Vec<Item>, RemoteError>> {
        let (tx, rx) = oneshot::channel();
        self.items
            .lock()
            .unwrap()
            .push_back(ItemsScript::Gated(rx));
        tx
    }

    pub fn push_login(&self, outcome: Result<AuthSession, RemoteError>) {
        self.logins.lock().unwrap().push_back(outcome);
    }

    pub fn push_registration(&self, outcome: Result<ServerAck, RemoteError>) {
        self.registrations.lock().unwrap().push_back(outcome);
    }

    pub fn push_password_change(&self, outcome: Result<ServerAck, RemoteError>) {
        self.password_changes.lock().unwrap().push_back(outcome);
    }

    pub fn push_profile(&self, outcome: Result<Profile, RemoteError>) {
        self.profiles.lock().unwrap().push_back(outcome);
    }

    pub fn push_profile_update(&self, outcome: Result<ServerAck, RemoteError>) {
        self.profile_updates.lock().unwrap().push_back(outcome);
    }

    pub fn push_creation(&self, outcome: Result<(), RemoteError>) {
        self.creations.lock().unwrap().push_back(outcome);
    }

    /// Number of `fetch_items` calls observed so far.
    pub fn item_fetches(&self) -> usize {
        self.item_calls.load(Ordering::SeqCst)
    }

    /// Every draft passed to `create_item`, in call order.
    pub fn created_drafts(&self) -> Vec<ItemDraft> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketGateway for FakeGateway {
    async fn fetch_items(&self) -> Result<Vec<Item>, RemoteError> {
        self.item_calls.fetch_add(1, Ordering::SeqCst);
        let script = self
            .items
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted fetch_items call");
        match script {
            ItemsScript::Ready(outcome) => outcome,
            ItemsScript::Gated(rx) => rx.await.expect("items gate sender dropped"),
        }
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<(), RemoteError> {
        self.created.lock().unwrap().push(draft.clone());
        self.creations
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted create_item call")
    }

    async fn login(&self, _credentials: &Credentials) -> Result<AuthSession, RemoteError> {
        self.logins
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted login call")
    }

    async fn register(&self, _registration: &Registration) -> Result<ServerAck, RemoteError> {
        self.registrations
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted register call")
    }

    async fn change_password(&self, _change: &PasswordChange) -> Result<ServerAck, RemoteError> {
        self.password_changes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted change_password call")
    }

    async fn fetch_profile(&self) -> Result<Profile, RemoteError> {
        self.profiles
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted fetch_profile call")
    }

    async fn update_profile(&self, _update: &ProfileUpdate) -> Result<ServerAck, RemoteError> {
        self.profile_updates
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted update_profile call")
    }
}
