// SPDX-License-Identifier: BUSL-1.1
//! # Voting Window — Pure Temporal Phase Machine
//!
//! A campaign's lifecycle is a pure function of the clock relative to its
//! configured start and end instants. There is no stored state field:
//! the phase is recomputed on every read, so it can never drift from the
//! wall clock or be corrupted by a missed transition.
//!
//! ## Phases
//!
//! - `Upcoming` — `now < start`. Registration is open, voting is not.
//! - `Active` — `start ≤ now ≤ end` (both ends inclusive). Voting is open,
//!   registration is not.
//! - `Closed` — `now > end`. Neither is open.
//!
//! Registration and voting windows are deliberately disjoint: a credential
//! must be obtained before the vote opens. A participant who did not
//! register before `start` can never register for that campaign.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The temporal phase of a campaign, derived from `(now, start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignPhase {
    /// Before the start instant — registration only.
    Upcoming,
    /// Between start and end (inclusive) — voting only.
    Active,
    /// After the end instant — read-only.
    Closed,
}

impl CampaignPhase {
    /// Returns the phase identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for CampaignPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated `[start, end]` voting window with `start < end`.
///
/// Construction is the only place the ordering is checked; once a
/// `VotingWindow` exists it is immutable and always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl VotingWindow {
    /// Create a voting window.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Window`] unless `start < end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::Window(format!(
                "start ({start}) must be before end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// The instant voting opens (and registration closes).
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// The instant voting closes.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Compute the phase at `now`. Pure; no side effects, no failure modes.
    pub fn phase_at(&self, now: DateTime<Utc>) -> CampaignPhase {
        if now < self.start {
            CampaignPhase::Upcoming
        } else if now <= self.end {
            CampaignPhase::Active
        } else {
            CampaignPhase::Closed
        }
    }

    /// Whether registration is permitted at `now` (strictly before start).
    pub fn can_register(&self, now: DateTime<Utc>) -> bool {
        self.phase_at(now) == CampaignPhase::Upcoming
    }

    /// Whether voting is permitted at `now`.
    pub fn can_vote(&self, now: DateTime<Utc>) -> bool {
        self.phase_at(now) == CampaignPhase::Active
    }
}
