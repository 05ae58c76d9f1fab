// SPDX-License-Identifier: BUSL-1.1
//! # Registrar — Credential Issuance
//!
//! Turns a successful eligibility check into a single-use anonymous
//! credential. The registrar holds no identity information: the only
//! artifact it records is the commitment hash of a freshly minted secret,
//! so a participant who re-registers simply receives a second, unlinkable
//! credential. Eligibility gating — not identity gating — is the control.
//!
//! ## Fail-Closed Rule
//!
//! Each configured restriction is checked once, in a fixed order, short-
//! circuiting on the first failure. A missing proof, a failing proof, and
//! a broken verification backend all yield the same outcome: registration
//! for that restriction fails and nothing is committed.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use vox_crypto::CredentialSecret;
use vox_core::CampaignId;
use vox_zkp::{EligibilityVerifier, PublicInput, RestrictionProofs};

use crate::error::ProtocolError;
use crate::store::CampaignStore;

/// Issues single-use anonymous credentials for open campaigns.
///
/// Collaborators are injected; the registrar owns neither storage nor the
/// verification backend.
pub struct Registrar {
    store: Arc<dyn CampaignStore>,
    verifier: Arc<dyn EligibilityVerifier>,
}

impl Registrar {
    /// Create a registrar over the given collaborators.
    pub fn new(store: Arc<dyn CampaignStore>, verifier: Arc<dyn EligibilityVerifier>) -> Self {
        Self { store, verifier }
    }

    /// Register for a campaign and mint a credential.
    ///
    /// Preconditions checked here, in order: the campaign exists, its
    /// registration window is open at `now`, and every configured
    /// restriction verifies against the submitted proofs. Only then is a
    /// secret drawn and its commitment recorded — the await on the
    /// verifier happens strictly before any ledger mutation, so a timeout
    /// or disconnect during verification commits nothing.
    ///
    /// The returned secret exists nowhere else; it is never logged and
    /// never stored.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::NotFound`], [`ProtocolError::RegistrationClosed`],
    /// or [`ProtocolError::Ineligible`] naming the failing restriction
    /// kind (and nothing about the proof contents).
    pub async fn register(
        &self,
        id: CampaignId,
        proofs: &RestrictionProofs,
        now: DateTime<Utc>,
    ) -> Result<CredentialSecret, ProtocolError> {
        let campaign = self.store.get(&id)?;

        if !campaign.can_register(now) {
            return Err(ProtocolError::RegistrationClosed(id));
        }

        for kind in campaign.restrictions().kinds() {
            // kinds() only yields configured restrictions, so the input
            // is always present.
            let Some(input) = PublicInput::from_restrictions(campaign.restrictions(), kind)
            else {
                continue;
            };

            let Some(proof) = proofs.get(kind) else {
                tracing::debug!(campaign = %id, kind = %kind, "no proof submitted for configured restriction");
                return Err(ProtocolError::Ineligible(kind));
            };

            let eligible = match self.verifier.verify(kind, proof, &input).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    // Fail closed: a verifier fault is indistinguishable
                    // from an unsatisfied restriction for the caller.
                    tracing::warn!(campaign = %id, kind = %kind, error = %err, "eligibility verification failed");
                    false
                }
            };

            if !eligible {
                return Err(ProtocolError::Ineligible(kind));
            }
        }

        let secret = CredentialSecret::generate();
        self.store.insert_credential(&id, secret.commitment())?;
        tracing::debug!(campaign = %id, "credential issued");
        Ok(secret)
    }
}
