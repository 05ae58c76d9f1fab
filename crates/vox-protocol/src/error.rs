// SPDX-License-Identifier: BUSL-1.1
//! Protocol error taxonomy.
//!
//! Every variant is surfaced to the calling layer; none is retryable
//! without new input. `InvalidCredential` deliberately carries no detail:
//! a never-issued secret, an already-consumed secret, and a malformed
//! secret are indistinguishable to the caller so the error is not an
//! oracle for ledger membership.

use thiserror::Error;

use vox_core::{CampaignId, RestrictionKind, ValidationError};

use crate::store::StoreError;

/// Error from a protocol operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The campaign id is unknown.
    #[error("{0} not found")]
    NotFound(CampaignId),

    /// Registration was attempted outside the registration window.
    #[error("registration is closed for {0}")]
    RegistrationClosed(CampaignId),

    /// A vote was attempted outside the active window.
    #[error("voting is not active for {0}")]
    VotingNotActive(CampaignId),

    /// An eligibility restriction was not satisfied. Carries the failing
    /// kind only — never proof contents.
    #[error("eligibility restriction not satisfied: {0}")]
    Ineligible(RestrictionKind),

    /// The chosen option is not on the campaign's ballot.
    #[error("option is not on the ballot")]
    InvalidOption,

    /// The presented credential cannot be redeemed. The message is
    /// identical for unknown, consumed, and malformed secrets.
    #[error("invalid credential")]
    InvalidCredential,

    /// Campaign data failed construction-time validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A campaign with this id already exists in the store.
    #[error("{0} already exists")]
    AlreadyExists(CampaignId),
}

impl From<StoreError> for ProtocolError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::AlreadyExists(id) => Self::AlreadyExists(id),
        }
    }
}
