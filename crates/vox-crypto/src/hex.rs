// SPDX-License-Identifier: BUSL-1.1
//! Lowercase hex encoding and strict decoding.
//!
//! Proofs and credential secrets travel as hex strings in request bodies.
//! Decoding is strict: odd lengths and non-hex characters are rejected.

use thiserror::Error;

/// Error decoding a hex string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Input length is not even.
    #[error("hex string has odd length {0}")]
    OddLength(usize),

    /// Input contains a non-hexadecimal character.
    #[error("invalid hex character {0:?}")]
    InvalidChar(char),

    /// Decoded byte length does not match the expected fixed size.
    #[error("expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Required byte length.
        expected: usize,
        /// Actual decoded length.
        got: usize,
    },
}

/// Encode bytes as a lowercase hex string.
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode a hex string (upper- or lowercase) into bytes.
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    if s.len() % 2 != 0 {
        return Err(HexError::OddLength(s.len()));
    }
    let mut out = Vec::with_capacity(s.len() / 2);
    let chars: Vec<char> = s.chars().collect();
    for pair in chars.chunks(2) {
        let hi = hex_value(pair[0])?;
        let lo = hex_value(pair[1])?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn hex_value(c: char) -> Result<u8, HexError> {
    c.to_digit(16)
        .map(|v| v as u8)
        .ok_or(HexError::InvalidChar(c))
}
