// SPDX-License-Identifier: BUSL-1.1
//! # Field-Sized Public-Input Encoding
//!
//! Restriction public inputs are handed to the proof verifier as opaque
//! 32-byte values. The encoding here must be deterministic and must match
//! the commitment scheme used on the proving side, which is why it lives in
//! the core rather than in any particular verifier adapter.
//!
//! ## Encoding Rule
//!
//! - Payloads of at most 32 UTF-8 bytes are right-aligned in a zero-padded
//!   32-byte big-endian value.
//! - Longer payloads are first reduced with SHA-256, which is already
//!   field-sized.
//!
//! Both cases are injective within their class and stable across releases;
//! a country code and a whitelist entry always normalize to the same value
//! on every node.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An opaque field-sized (32-byte) value handed to the proof verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldElement([u8; 32]);

impl FieldElement {
    /// Wrap raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Encode a UTF-8 string payload.
    pub fn from_str_payload(payload: &str) -> Self {
        let bytes = payload.as_bytes();
        if bytes.len() <= 32 {
            let mut out = [0u8; 32];
            out[32 - bytes.len()..].copy_from_slice(bytes);
            Self(out)
        } else {
            let hash = Sha256::digest(bytes);
            let mut out = [0u8; 32];
            out.copy_from_slice(&hash);
            Self(out)
        }
    }

    /// Encode an unsigned integer payload (big-endian, right-aligned).
    pub fn from_u64(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        Self(out)
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
