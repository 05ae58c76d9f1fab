// SPDX-License-Identifier: BUSL-1.1
//! Shared application state.
//!
//! Wires the protocol services to a single in-memory store and the
//! configured eligibility verifier. Cloning is cheap (Arc handles).

use std::sync::Arc;

use vox_protocol::{CampaignStore, MemoryStore, Registrar, VotingEngine};
use vox_zkp::EligibilityVerifier;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Campaign store — also used directly by read-only handlers.
    pub store: Arc<MemoryStore>,
    /// Registration service.
    pub registrar: Arc<Registrar>,
    /// Voting service.
    pub engine: Arc<VotingEngine>,
}

impl AppState {
    /// Build the state over a fresh in-memory store and the given
    /// verification backend.
    pub fn new(verifier: Arc<dyn EligibilityVerifier>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let store_dyn: Arc<dyn CampaignStore> = store.clone();
        let registrar = Arc::new(Registrar::new(store_dyn.clone(), verifier));
        let engine = Arc::new(VotingEngine::new(store_dyn));
        Self {
            store,
            registrar,
            engine,
        }
    }
}
