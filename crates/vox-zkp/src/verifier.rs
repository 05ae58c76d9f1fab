// SPDX-License-Identifier: BUSL-1.1
//! # Eligibility Verifier Trait
//!
//! Abstract interface over zero-knowledge eligibility-proof backends.
//! One polymorphic `verify` entrypoint parameterized by restriction kind
//! replaces per-circuit verification methods, so the protocol core never
//! depends on a specific proving system.
//!
//! ## Contract
//!
//! - `verify` is idempotent and side-effect-free from the caller's view.
//! - Implementations must be `Send + Sync`; they are shared across request
//!   tasks behind an `Arc`.
//! - The trait is object-safe (boxed futures) so the calling layer can
//!   swap backends at runtime — a real prover, the always-true mock, or a
//!   test double.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vox_core::{FieldElement, RestrictionKind, RestrictionSet};

/// Boxed future type for object-safe async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error from a proof-verification backend.
///
/// The registration protocol treats every variant as "not eligible"
/// (fail-closed); the distinction exists for operator logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// The proof bytes could not be parsed by the backend.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// The backend failed or was unreachable.
    #[error("verification backend error: {0}")]
    Backend(String),
}

/// The normalized public input for one restriction check.
///
/// Values are carried in the verifier's field-sized representation
/// (see [`vox_core::FieldElement`]); the encoding is deterministic and
/// matches the commitment scheme on the proving side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PublicInput {
    /// Minimum-age predicate input.
    Age {
        /// Required minimum age in whole years.
        min_age: u32,
    },
    /// Permitted-country predicate input.
    Country {
        /// The country code as one field element.
        code: FieldElement,
    },
    /// Whitelist-membership predicate input.
    Whitelist {
        /// Whitelisted identifiers as an ordered sequence of field elements.
        members: Vec<FieldElement>,
    },
}

impl PublicInput {
    /// Build the public input for `kind` from a campaign's restriction set.
    ///
    /// Returns `None` when the restriction is not configured. Whitelist
    /// order is preserved from the campaign configuration — the proving
    /// side commits to the same ordered sequence.
    pub fn from_restrictions(set: &RestrictionSet, kind: RestrictionKind) -> Option<Self> {
        match kind {
            RestrictionKind::Age => set.min_age.map(|min_age| Self::Age { min_age }),
            RestrictionKind::Country => set.country.as_deref().map(|code| Self::Country {
                code: FieldElement::from_str_payload(code),
            }),
            RestrictionKind::Whitelist => set.whitelist.as_ref().map(|entries| Self::Whitelist {
                members: entries
                    .iter()
                    .map(|entry| FieldElement::from_str_payload(entry))
                    .collect(),
            }),
        }
    }

    /// The restriction kind this input belongs to.
    pub fn kind(&self) -> RestrictionKind {
        match self {
            Self::Age { .. } => RestrictionKind::Age,
            Self::Country { .. } => RestrictionKind::Country,
            Self::Whitelist { .. } => RestrictionKind::Whitelist,
        }
    }
}

/// The proofs a participant submits at registration, one per configured
/// restriction. All optional — but a configured restriction with a missing
/// proof fails registration (fail-closed).
#[derive(Debug, Clone, Default)]
pub struct RestrictionProofs {
    /// Proof for the minimum-age predicate.
    pub age: Option<Vec<u8>>,
    /// Proof for the permitted-country predicate.
    pub country: Option<Vec<u8>>,
    /// Proof for the whitelist-membership predicate.
    pub whitelist: Option<Vec<u8>>,
}

impl RestrictionProofs {
    /// The submitted proof for `kind`, if any.
    pub fn get(&self, kind: RestrictionKind) -> Option<&[u8]> {
        match kind {
            RestrictionKind::Age => self.age.as_deref(),
            RestrictionKind::Country => self.country.as_deref(),
            RestrictionKind::Whitelist => self.whitelist.as_deref(),
        }
    }
}

/// Abstract capability: verify one eligibility proof.
///
/// Supplied by an external proving-backend adapter. The protocol works
/// with any implementation satisfying this signature, including
/// [`crate::MockVerifier`] for restriction-free deployments.
pub trait EligibilityVerifier: Send + Sync {
    /// Check whether `proof` establishes the predicate described by
    /// `public_input` for restriction `kind`.
    ///
    /// `Ok(false)` means the predicate does not hold; `Err` means the
    /// backend could not decide. Callers must treat both as ineligible.
    fn verify<'a>(
        &'a self,
        kind: RestrictionKind,
        proof: &'a [u8],
        public_input: &'a PublicInput,
    ) -> BoxFuture<'a, Result<bool, VerifierError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> RestrictionSet {
        RestrictionSet {
            min_age: Some(21),
            country: Some("NL".to_string()),
            whitelist: Some(vec!["alice".to_string(), "bob".to_string()]),
        }
    }

    #[test]
    fn unconfigured_restriction_has_no_input() {
        let set = RestrictionSet::default();
        assert!(PublicInput::from_restrictions(&set, RestrictionKind::Age).is_none());
        assert!(PublicInput::from_restrictions(&set, RestrictionKind::Country).is_none());
        assert!(PublicInput::from_restrictions(&set, RestrictionKind::Whitelist).is_none());
    }

    #[test]
    fn age_input_carries_min_age() {
        let input = PublicInput::from_restrictions(&full_set(), RestrictionKind::Age).unwrap();
        assert_eq!(input, PublicInput::Age { min_age: 21 });
        assert_eq!(input.kind(), RestrictionKind::Age);
    }

    #[test]
    fn country_input_is_field_encoded() {
        let input = PublicInput::from_restrictions(&full_set(), RestrictionKind::Country).unwrap();
        match input {
            PublicInput::Country { code } => {
                assert_eq!(code, FieldElement::from_str_payload("NL"));
            }
            other => panic!("expected country input, got {other:?}"),
        }
    }

    #[test]
    fn whitelist_input_preserves_order() {
        let input =
            PublicInput::from_restrictions(&full_set(), RestrictionKind::Whitelist).unwrap();
        match input {
            PublicInput::Whitelist { members } => {
                assert_eq!(
                    members,
                    vec![
                        FieldElement::from_str_payload("alice"),
                        FieldElement::from_str_payload("bob"),
                    ]
                );
            }
            other => panic!("expected whitelist input, got {other:?}"),
        }
    }

    #[test]
    fn normalization_is_deterministic() {
        let a = PublicInput::from_restrictions(&full_set(), RestrictionKind::Whitelist);
        let b = PublicInput::from_restrictions(&full_set(), RestrictionKind::Whitelist);
        assert_eq!(a, b);
    }

    #[test]
    fn proofs_lookup_by_kind() {
        let proofs = RestrictionProofs {
            age: Some(vec![1]),
            country: None,
            whitelist: Some(vec![3]),
        };
        assert_eq!(proofs.get(RestrictionKind::Age), Some(&[1u8][..]));
        assert_eq!(proofs.get(RestrictionKind::Country), None);
        assert_eq!(proofs.get(RestrictionKind::Whitelist), Some(&[3u8][..]));
    }
}
