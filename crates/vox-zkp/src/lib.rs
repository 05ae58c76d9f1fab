// SPDX-License-Identifier: BUSL-1.1
//! # vox-zkp — Eligibility Verification Seam
//!
//! The registration protocol consumes a proof-verification capability; it
//! never implements one. This crate defines that seam:
//!
//! - **Trait** ([`verifier`]): [`EligibilityVerifier`] — given a
//!   restriction kind, an opaque proof, and the normalized public input,
//!   answer whether the restriction holds. Async (verification may be a
//!   network call or heavy local computation), object-safe, `Send + Sync`.
//!
//! - **Inputs** ([`verifier::PublicInput`]): deterministic normalization
//!   of a campaign's restriction values into the verifier's field-sized
//!   representation. This lives with the seam because the encoding must
//!   match the proving side exactly.
//!
//! - **Mock** ([`mock`]): an always-true verifier for campaigns without
//!   restrictions, plus deterministic test doubles.
//!
//! ## Fail-Closed Contract
//!
//! Callers must treat any verifier error as "restriction not satisfied".
//! A broken proving backend can never widen eligibility.

pub mod mock;
pub mod verifier;

pub use mock::{ErroringVerifier, MockVerifier, StaticVerifier};
pub use verifier::{BoxFuture, EligibilityVerifier, PublicInput, RestrictionProofs, VerifierError};
