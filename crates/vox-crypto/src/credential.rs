// SPDX-License-Identifier: BUSL-1.1
//! # Single-Use Anonymous Credentials
//!
//! A credential is a 32-byte secret drawn from the OS CSPRNG at
//! registration time. The participant keeps the secret; the server keeps
//! only its SHA-256 commitment. Presenting a secret whose commitment is in
//! the ledger proves possession without revealing when or to whom the
//! credential was issued.
//!
//! ## Security Invariant
//!
//! - The secret is zeroized when dropped and is never serialized by this
//!   crate — the only way out is the explicit one-time [`CredentialSecret::to_hex`].
//! - `Debug` is redacted so a stray log line cannot leak key material.
//! - Commitment equality runs in constant time.

use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::hex::{self, HexError};

/// A participant's voting secret — 256 bits of CSPRNG entropy.
///
/// Never stored server-side; minted at registration, handed to the caller,
/// and reconstructed from the request body at vote time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CredentialSecret([u8; 32]);

impl CredentialSecret {
    /// Mint a fresh secret from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Reconstruct a secret from its hex hand-off form.
    ///
    /// # Errors
    ///
    /// Returns [`HexError`] for malformed hex or a length other than
    /// 32 bytes. Callers in the voting path must collapse any such error
    /// into their generic invalid-credential outcome — a malformed secret
    /// must be indistinguishable from an unknown one.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(HexError::InvalidLength {
                expected: 32,
                got: bytes.len(),
            });
        }
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    /// Render the secret for the one-time hand-off to the participant.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Compute the SHA-256 commitment of this secret.
    pub fn commitment(&self) -> CommitmentHash {
        let digest = Sha256::digest(self.0);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        CommitmentHash(bytes)
    }
}

impl std::fmt::Debug for CredentialSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CredentialSecret(..)")
    }
}

/// The one-way commitment of a credential secret.
///
/// This is the only credential artifact the server retains. Equality is
/// constant-time; the std `Hash` impl allows direct use as a set member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommitmentHash([u8; 32]);

impl CommitmentHash {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Access the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl PartialEq for CommitmentHash {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for CommitmentHash {}

impl std::hash::Hash for CommitmentHash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl std::fmt::Display for CommitmentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_secrets_are_distinct() {
        let a = CredentialSecret::generate();
        let b = CredentialSecret::generate();
        assert_ne!(a.commitment(), b.commitment());
    }

    #[test]
    fn hex_roundtrip_preserves_commitment() {
        let secret = CredentialSecret::generate();
        let restored = CredentialSecret::from_hex(&secret.to_hex()).unwrap();
        assert_eq!(secret.commitment(), restored.commitment());
    }

    #[test]
    fn commitment_is_deterministic() {
        let secret = CredentialSecret::generate();
        assert_eq!(secret.commitment(), secret.commitment());
    }

    #[test]
    fn malformed_hex_rejected() {
        assert!(CredentialSecret::from_hex("not hex").is_err());
        assert!(CredentialSecret::from_hex("abcd").is_err()); // too short
    }

    #[test]
    fn debug_is_redacted() {
        let secret = CredentialSecret::generate();
        let rendered = format!("{secret:?}");
        assert_eq!(rendered, "CredentialSecret(..)");
        assert!(!rendered.contains(&secret.to_hex()));
    }

    #[test]
    fn commitment_usable_as_set_member() {
        let mut set = HashSet::new();
        let secret = CredentialSecret::generate();
        assert!(set.insert(secret.commitment()));
        assert!(!set.insert(secret.commitment()));
        assert!(set.remove(&secret.commitment()));
        assert!(!set.remove(&secret.commitment()));
    }

    #[test]
    fn commitment_hex_is_64_chars() {
        let secret = CredentialSecret::generate();
        assert_eq!(secret.commitment().to_hex().len(), 64);
    }

    #[test]
    fn commitment_serde_roundtrip() {
        let hash = CredentialSecret::generate().commitment();
        let json = serde_json::to_string(&hash).unwrap();
        let parsed: CommitmentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, parsed);
    }
}
