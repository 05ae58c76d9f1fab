// SPDX-License-Identifier: BUSL-1.1
//! # vox-protocol — Anonymous Registration-and-Voting Protocol
//!
//! The core of the Vox stack. An organizer publishes a time-boxed campaign
//! with a fixed option set and optional eligibility restrictions; eligible
//! participants register anonymously before the vote opens; each registered
//! participant casts exactly one vote, with no stored link between identity
//! and ballot.
//!
//! ## Components
//!
//! - **Campaign** ([`campaign`]): the aggregate root — immutable option
//!   list, restriction set and voting window; the mutable registration
//!   ledger (outstanding commitment hashes) and append-only vote sequence.
//! - **Store** ([`store`], [`memory`]): the persistence seam. The one
//!   non-negotiable primitive is `consume_credential_and_vote`, which must
//!   be linearizable per campaign — two concurrent presentations of the
//!   same secret can never both succeed.
//! - **Registrar** ([`registrar`]): gates registration on the campaign
//!   phase, runs the configured eligibility checks (fail-closed), mints a
//!   fresh credential and records only its commitment.
//! - **VotingEngine** ([`engine`]): gates voting on the campaign phase,
//!   validates the chosen option, and consumes the credential exactly once.
//!
//! ## Shared-State Policy
//!
//! The ledger and the vote sequence are owned by the campaign aggregate
//! and are mutated only through the registrar and the voting engine, each
//! mutation a single atomic store primitive.

pub mod campaign;
pub mod engine;
pub mod error;
pub mod memory;
pub mod registrar;
pub mod store;

pub use campaign::{Campaign, CampaignSummary};
pub use engine::VotingEngine;
pub use error::ProtocolError;
pub use memory::MemoryStore;
pub use registrar::Registrar;
pub use store::{CampaignStore, StoreError};
