// SPDX-License-Identifier: BUSL-1.1
//! # vox-crypto — Credential Cryptography
//!
//! The credential scheme behind anonymous voting:
//!
//! - **Secret** ([`credential::CredentialSecret`]): 32 bytes from the OS
//!   CSPRNG, handed to the participant exactly once and zeroized on drop.
//!   The server never stores or logs it.
//! - **Commitment** ([`credential::CommitmentHash`]): the SHA-256 digest of
//!   the secret. Only the commitment survives server-side, establishing a
//!   one-way link between "a credential was issued" and "this hash is
//!   redeemable" — and no link to any identity.
//!
//! ## Security Invariant
//!
//! Commitment equality is constant-time (`subtle`), so ledger lookups do
//! not leak hash prefixes through timing.

pub mod credential;
pub mod hex;

pub use credential::{CommitmentHash, CredentialSecret};
pub use hex::{decode as hex_decode, encode as hex_encode};
