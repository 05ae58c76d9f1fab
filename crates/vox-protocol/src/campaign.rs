// SPDX-License-Identifier: BUSL-1.1
//! # Campaign Aggregate
//!
//! The aggregate root of the protocol. Identity, option list, restriction
//! set and voting window are fixed at creation; the registration ledger
//! and vote sequence are the only mutable state, and only the protocol
//! services mutate them.
//!
//! ## Invariants
//!
//! - `vote_count ≤ registered_count` at every point in time.
//! - Every vote entry is a member of the option list.
//! - The ledger never contains a commitment hash twice.
//! - `registered_count` counts credentials ever issued, not the current
//!   ledger size — consuming a credential does not decrement it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vox_core::{
    CampaignId, CampaignPhase, RestrictionSet, ValidationError, VotingWindow,
};
use vox_crypto::CommitmentHash;

/// A time-boxed vote with a fixed option set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    id: CampaignId,
    name: String,
    description: String,
    options: Vec<String>,
    restrictions: RestrictionSet,
    window: VotingWindow,
    /// Outstanding (unconsumed) commitment hashes — the registration ledger.
    outstanding: HashSet<CommitmentHash>,
    /// Append-only sequence of cast option selections.
    votes: Vec<String>,
    registered_count: u64,
    vote_count: u64,
    created_at: DateTime<Utc>,
}

impl Campaign {
    /// Create a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the option list has fewer than two
    /// entries, contains blanks or duplicates, when a restriction value is
    /// unusable, or when the window is inverted.
    pub fn new(
        name: String,
        description: String,
        options: Vec<String>,
        restrictions: RestrictionSet,
        window: VotingWindow,
    ) -> Result<Self, ValidationError> {
        if options.len() < 2 {
            return Err(ValidationError::OptionList(format!(
                "need at least 2 options, got {}",
                options.len()
            )));
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(ValidationError::OptionList(
                "options must not be blank".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(ValidationError::OptionList(format!(
                    "duplicate option {option:?}"
                )));
            }
        }
        restrictions.validate()?;

        Ok(Self {
            id: CampaignId::new(),
            name,
            description,
            options,
            restrictions,
            window,
            outstanding: HashSet::new(),
            votes: Vec::new(),
            registered_count: 0,
            vote_count: 0,
            created_at: Utc::now(),
        })
    }

    /// The campaign identifier.
    pub fn id(&self) -> CampaignId {
        self.id
    }

    /// The campaign name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The campaign description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The fixed, ordered option list.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The configured eligibility restrictions.
    pub fn restrictions(&self) -> &RestrictionSet {
        &self.restrictions
    }

    /// The voting window.
    pub fn window(&self) -> &VotingWindow {
        &self.window
    }

    /// Credentials ever issued for this campaign.
    pub fn registered_count(&self) -> u64 {
        self.registered_count
    }

    /// Votes cast so far.
    pub fn vote_count(&self) -> u64 {
        self.vote_count
    }

    /// Number of outstanding (unconsumed) credentials.
    pub fn outstanding_count(&self) -> usize {
        self.outstanding.len()
    }

    /// The cast votes, in removed-before-appended causal order.
    pub fn votes(&self) -> &[String] {
        &self.votes
    }

    /// The temporal phase at `now` — recomputed on every read.
    pub fn phase(&self, now: DateTime<Utc>) -> CampaignPhase {
        self.window.phase_at(now)
    }

    /// Whether registration is permitted at `now`.
    pub fn can_register(&self, now: DateTime<Utc>) -> bool {
        self.window.can_register(now)
    }

    /// Whether voting is permitted at `now`.
    pub fn can_vote(&self, now: DateTime<Utc>) -> bool {
        self.window.can_vote(now)
    }

    /// Whether `option` is on the ballot.
    pub fn is_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Record a freshly issued credential. Protocol-internal: called only
    /// by the store on behalf of the registrar.
    ///
    /// Returns `false` when the hash is already present, in which case
    /// nothing changes (the ledger never holds a hash twice).
    pub fn issue_credential(&mut self, hash: CommitmentHash) -> bool {
        if self.outstanding.insert(hash) {
            self.registered_count += 1;
            true
        } else {
            false
        }
    }

    /// Atomically test-and-remove `hash` and, on success, append `option`.
    /// Protocol-internal: called only by the store on behalf of the voting
    /// engine, which has already validated option membership.
    ///
    /// Returns `false` (and mutates nothing) when the hash is not
    /// outstanding — the sole gate against double voting and voting
    /// without registration.
    pub fn consume_and_record(&mut self, hash: &CommitmentHash, option: &str) -> bool {
        debug_assert!(self.is_option(option), "engine must validate the option");
        if !self.outstanding.remove(hash) {
            return false;
        }
        self.votes.push(option.to_string());
        self.vote_count += 1;
        true
    }

    /// Build the read-only summary at `now`.
    ///
    /// Per-option tallies are deliberately absent: votes are an ordered
    /// sequence, and exposing counts by option mid-campaign would leak
    /// interim results. Totals only.
    pub fn summary(&self, now: DateTime<Utc>) -> CampaignSummary {
        CampaignSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            options: self.options.clone(),
            restrictions: self.restrictions.clone(),
            start: self.window.start(),
            end: self.window.end(),
            phase: self.phase(now),
            registered_count: self.registered_count,
            vote_count: self.vote_count,
            created_at: self.created_at,
        }
    }
}

/// Read-only view of a campaign: configuration plus total counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSummary {
    /// Campaign identifier.
    pub id: CampaignId,
    /// Campaign name.
    pub name: String,
    /// Campaign description.
    pub description: String,
    /// The fixed option list.
    pub options: Vec<String>,
    /// Configured eligibility restrictions.
    pub restrictions: RestrictionSet,
    /// Instant voting opens.
    pub start: DateTime<Utc>,
    /// Instant voting closes.
    pub end: DateTime<Utc>,
    /// Phase at the time the summary was taken.
    pub phase: CampaignPhase,
    /// Credentials ever issued.
    pub registered_count: u64,
    /// Votes cast.
    pub vote_count: u64,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}
