// SPDX-License-Identifier: BUSL-1.1
//! # Voting Engine — Exactly-Once Credential Consumption
//!
//! Validates a presented secret against the registration ledger, validates
//! the chosen option, and atomically retires the credential while
//! appending the vote.
//!
//! The atomic test-and-remove in the store is the sole gate against double
//! voting and against voting without registration. An unknown secret, an
//! already-consumed secret, and a malformed secret all produce the same
//! [`ProtocolError::InvalidCredential`] — the error is not an oracle for
//! ledger membership.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use vox_core::CampaignId;
use vox_crypto::CredentialSecret;

use crate::error::ProtocolError;
use crate::store::CampaignStore;

/// Consumes credentials and records votes.
pub struct VotingEngine {
    store: Arc<dyn CampaignStore>,
}

impl VotingEngine {
    /// Create a voting engine over the given store.
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store }
    }

    /// Cast a vote.
    ///
    /// Preconditions checked here, in order: the campaign exists, voting
    /// is active at `now`, and `option` is on the ballot. Only then is the
    /// secret's commitment presented to the store's atomic
    /// consume-and-vote primitive — all failures before that point leave
    /// the ledger and the vote sequence untouched, and after that point
    /// the vote is already committed.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::NotFound`], [`ProtocolError::VotingNotActive`],
    /// [`ProtocolError::InvalidOption`], or
    /// [`ProtocolError::InvalidCredential`].
    pub fn cast_vote(
        &self,
        id: CampaignId,
        secret_hex: &str,
        option: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ProtocolError> {
        let campaign = self.store.get(&id)?;

        if !campaign.can_vote(now) {
            return Err(ProtocolError::VotingNotActive(id));
        }
        if !campaign.is_option(option) {
            return Err(ProtocolError::InvalidOption);
        }

        // Malformed secrets collapse into the generic credential error.
        let secret = CredentialSecret::from_hex(secret_hex)
            .map_err(|_| ProtocolError::InvalidCredential)?;
        let hash = secret.commitment();

        if !self.store.consume_credential_and_vote(&id, &hash, option)? {
            return Err(ProtocolError::InvalidCredential);
        }

        tracing::debug!(campaign = %id, "vote recorded");
        Ok(())
    }
}
