//! # Sell State
//!
//! Single tri-state slot for the sell-an-item flow. Drafts are validated
//! locally before the gateway is involved, so a bad form never costs a
//! round trip.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error};

use stuma_client::MarketGateway;
use stuma_core::validation::validate_item_draft;
use stuma_core::{ItemDraft, RemoteResult};

/// Sell state manager.
pub struct SellState {
    gateway: Arc<dyn MarketGateway>,
    submission: watch::Sender<Option<RemoteResult<()>>>,
}

impl SellState {
    pub fn new(gateway: Arc<dyn MarketGateway>) -> Self {
        SellState {
            gateway,
            submission: watch::channel(None).0,
        }
    }

    /// Submits a listing draft.
    ///
    /// ## Behavior
    /// - `Loading` is published synchronously.
    /// - A draft that fails local validation resolves to `Failure` without
    ///   any network call.
    /// - Otherwise resolves with the gateway outcome.
    pub async fn submit(&self, draft: ItemDraft) {
        self.submission.send_replace(Some(RemoteResult::Loading));

        if let Err(err) = validate_item_draft(&draft) {
            error!(error = %err, "rejecting invalid listing draft");
            self.submission
                .send_replace(Some(RemoteResult::Failure(err.into())));
            return;
        }

        debug!(name = %draft.name, "submitting listing");
        let outcome = self.gateway.create_item(&draft).await;
        if let Err(err) = &outcome {
            error!(error = %err, "listing submission failed");
        }
        self.submission.send_replace(Some(outcome.into()));
    }

    /// Returns the slot to absent once the UI has consumed the outcome.
    pub fn reset(&self) {
        debug!("sell state reset");
        self.submission.send_replace(None);
    }

    pub fn submission_state(&self) -> Option<RemoteResult<()>> {
        self.submission.borrow().clone()
    }

    pub fn watch_submission(&self) -> watch::Receiver<Option<RemoteResult<()>>> {
        self.submission.subscribe()
    }
}
