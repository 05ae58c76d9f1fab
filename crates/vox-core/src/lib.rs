// SPDX-License-Identifier: BUSL-1.1
//! # vox-core — Domain Types for Anonymous Campaign Voting
//!
//! Foundation crate for the Vox stack. Defines the types every other crate
//! agrees on:
//!
//! - **Identity** ([`identity`]): `CampaignId` UUID newtype.
//! - **Window** ([`window`]): the campaign voting window and the pure
//!   temporal phase machine (`Upcoming → Active → Closed`). The phase is
//!   never stored — it is recomputed from the clock on every read.
//! - **Restrictions** ([`restriction`]): the eligibility predicates a
//!   campaign may require (minimum age, permitted country, whitelist).
//! - **Field encoding** ([`field`]): deterministic normalization of
//!   restriction public inputs into field-sized values for the proof
//!   verifier.
//!
//! ## Crate Policy
//!
//! No I/O, no clock reads (callers pass `now`), no `unsafe`.

pub mod error;
pub mod field;
pub mod identity;
pub mod restriction;
pub mod window;

pub use error::ValidationError;
pub use field::FieldElement;
pub use identity::CampaignId;
pub use restriction::{RestrictionKind, RestrictionSet};
pub use window::{CampaignPhase, VotingWindow};
