// SPDX-License-Identifier: BUSL-1.1
//! # Domain Identity Newtypes
//!
//! Newtype wrappers for domain identifiers. A `CampaignId` cannot be
//! confused with a bare `Uuid` pulled from an unrelated context.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a voting campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub Uuid);

impl CampaignId {
    /// Generate a new random campaign identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CampaignId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CampaignId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "campaign:{}", self.0)
    }
}
