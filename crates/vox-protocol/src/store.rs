// SPDX-License-Identifier: BUSL-1.1
//! # Campaign Persistence Seam
//!
//! The protocol owns no storage; it is handed a [`CampaignStore`] by the
//! calling layer. The trait is synchronous — the eligibility check is the
//! protocol's only suspension point, and every store mutation is a single
//! atomic step.

use thiserror::Error;

use vox_core::CampaignId;
use vox_crypto::CommitmentHash;

use crate::campaign::Campaign;

/// Error from a store operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No campaign with this id.
    #[error("{0} not found")]
    NotFound(CampaignId),

    /// A campaign with this id is already stored.
    #[error("{0} already exists")]
    AlreadyExists(CampaignId),
}

/// Persistence collaborator for campaign aggregates.
///
/// ## Atomicity Contract
///
/// - [`insert_credential`](Self::insert_credential) and
///   [`consume_credential_and_vote`](Self::consume_credential_and_vote)
///   mutate the aggregate in one atomic step each; a failed call leaves
///   the aggregate untouched.
/// - `consume_credential_and_vote` must be **linearizable per campaign**:
///   of any number of concurrent calls presenting the same commitment
///   hash, exactly one observes `true`. A read-then-write implementation
///   is a double-vote race and does not satisfy this trait.
pub trait CampaignStore: Send + Sync {
    /// Store a new campaign.
    ///
    /// # Errors
    ///
    /// [`StoreError::AlreadyExists`] when the id is taken.
    fn create(&self, campaign: Campaign) -> Result<(), StoreError>;

    /// Load a snapshot of a campaign.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown id.
    fn get(&self, id: &CampaignId) -> Result<Campaign, StoreError>;

    /// Snapshots of all campaigns, in no particular order.
    fn list(&self) -> Vec<Campaign>;

    /// Atomically add a freshly issued commitment hash to the campaign's
    /// ledger and bump its registered count.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown id.
    fn insert_credential(
        &self,
        id: &CampaignId,
        hash: CommitmentHash,
    ) -> Result<(), StoreError>;

    /// Atomically test-and-remove `hash` from the campaign's ledger and,
    /// if it was outstanding, append `option` to the vote sequence.
    ///
    /// Returns `Ok(true)` when the credential was consumed and the vote
    /// recorded, `Ok(false)` when the hash was not outstanding. The caller
    /// must have validated `option` against the campaign's option list.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] for an unknown id.
    fn consume_credential_and_vote(
        &self,
        id: &CampaignId,
        hash: &CommitmentHash,
        option: &str,
    ) -> Result<bool, StoreError>;
}
