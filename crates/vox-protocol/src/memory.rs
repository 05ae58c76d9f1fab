// SPDX-License-Identifier: BUSL-1.1
//! # In-Memory Campaign Store
//!
//! [`CampaignStore`] over a `DashMap` keyed by campaign UUID. A `get_mut`
//! entry holds the shard write lock for that key, so each mutating
//! primitive runs as a critical section over the whole aggregate — the
//! linearizability the store contract demands falls out of the entry lock.
//!
//! Data does not survive restarts. Suitable for development, tests, and
//! single-node deployments.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use vox_core::CampaignId;
use vox_crypto::CommitmentHash;

use crate::campaign::Campaign;
use crate::store::{CampaignStore, StoreError};

/// In-memory, thread-safe campaign store.
///
/// Share it behind an `Arc` like the other collaborators.
#[derive(Debug, Default)]
pub struct MemoryStore {
    campaigns: DashMap<Uuid, Campaign>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored campaigns.
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}

impl CampaignStore for MemoryStore {
    fn create(&self, campaign: Campaign) -> Result<(), StoreError> {
        let id = campaign.id();
        match self.campaigns.entry(*id.as_uuid()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(id)),
            Entry::Vacant(slot) => {
                slot.insert(campaign);
                Ok(())
            }
        }
    }

    fn get(&self, id: &CampaignId) -> Result<Campaign, StoreError> {
        self.campaigns
            .get(id.as_uuid())
            .map(|entry| entry.clone())
            .ok_or(StoreError::NotFound(*id))
    }

    fn list(&self) -> Vec<Campaign> {
        self.campaigns
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn insert_credential(
        &self,
        id: &CampaignId,
        hash: CommitmentHash,
    ) -> Result<(), StoreError> {
        let mut entry = self
            .campaigns
            .get_mut(id.as_uuid())
            .ok_or(StoreError::NotFound(*id))?;
        let inserted = entry.issue_credential(hash);
        // A freshly drawn secret colliding with an outstanding hash means
        // the CSPRNG or the digest is broken.
        debug_assert!(inserted, "commitment hash already in ledger");
        Ok(())
    }

    fn consume_credential_and_vote(
        &self,
        id: &CampaignId,
        hash: &CommitmentHash,
        option: &str,
    ) -> Result<bool, StoreError> {
        // The get_mut guard holds the shard lock for the duration of the
        // test-and-remove plus append, making the pair one critical section.
        let mut entry = self
            .campaigns
            .get_mut(id.as_uuid())
            .ok_or(StoreError::NotFound(*id))?;
        Ok(entry.consume_and_record(hash, option))
    }
}
