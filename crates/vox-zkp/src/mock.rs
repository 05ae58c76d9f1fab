// SPDX-License-Identifier: BUSL-1.1
//! # Mock Verifiers
//!
//! Deterministic [`EligibilityVerifier`] implementations:
//!
//! - [`MockVerifier`] accepts every proof. Use it for campaigns without
//!   restrictions or in development deployments where no proving backend
//!   exists yet.
//! - [`StaticVerifier`] answers from a fixed per-kind outcome table.
//! - [`ErroringVerifier`] always fails, for exercising the fail-closed
//!   path.
//!
//! ## Security Notice
//!
//! `MockVerifier` provides no eligibility guarantee whatsoever. Wiring it
//! to a campaign with restrictions makes those restrictions decorative.

use std::collections::HashMap;

use vox_core::RestrictionKind;

use crate::verifier::{BoxFuture, EligibilityVerifier, PublicInput, VerifierError};

/// Accepts every proof unconditionally.
#[derive(Debug, Default, Clone)]
pub struct MockVerifier;

impl EligibilityVerifier for MockVerifier {
    fn verify<'a>(
        &'a self,
        _kind: RestrictionKind,
        _proof: &'a [u8],
        _public_input: &'a PublicInput,
    ) -> BoxFuture<'a, Result<bool, VerifierError>> {
        Box::pin(async { Ok(true) })
    }
}

/// Answers from a fixed per-kind outcome table; kinds not listed verify
/// as `true`.
#[derive(Debug, Default, Clone)]
pub struct StaticVerifier {
    outcomes: HashMap<RestrictionKind, bool>,
}

impl StaticVerifier {
    /// A verifier that accepts every kind.
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Mark `kind` as failing verification.
    pub fn deny(mut self, kind: RestrictionKind) -> Self {
        self.outcomes.insert(kind, false);
        self
    }
}

impl EligibilityVerifier for StaticVerifier {
    fn verify<'a>(
        &'a self,
        kind: RestrictionKind,
        _proof: &'a [u8],
        _public_input: &'a PublicInput,
    ) -> BoxFuture<'a, Result<bool, VerifierError>> {
        let outcome = *self.outcomes.get(&kind).unwrap_or(&true);
        Box::pin(async move { Ok(outcome) })
    }
}

/// Fails every verification with a backend error.
#[derive(Debug, Default, Clone)]
pub struct ErroringVerifier;

impl EligibilityVerifier for ErroringVerifier {
    fn verify<'a>(
        &'a self,
        kind: RestrictionKind,
        _proof: &'a [u8],
        _public_input: &'a PublicInput,
    ) -> BoxFuture<'a, Result<bool, VerifierError>> {
        Box::pin(async move {
            Err(VerifierError::Backend(format!(
                "backend unavailable for {kind} check"
            )))
        })
    }
}
