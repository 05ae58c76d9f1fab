// SPDX-License-Identifier: BUSL-1.1
//! # Eligibility Restrictions
//!
//! A campaign may require zero or more eligibility predicates, each checked
//! at registration time via a zero-knowledge proof without revealing the
//! underlying attribute. The restrictions are independent: the registrar
//! checks each configured one in a fixed order and short-circuits on the
//! first failure.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The kind of an eligibility restriction.
///
/// Carried in error responses (never alongside proof contents) so a caller
/// knows which predicate failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKind {
    /// Minimum age predicate.
    Age,
    /// Permitted country predicate.
    Country,
    /// Explicit whitelist membership predicate.
    Whitelist,
}

impl RestrictionKind {
    /// Returns the kind identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Country => "country",
            Self::Whitelist => "whitelist",
        }
    }
}

impl std::fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of restrictions configured on a campaign.
///
/// All three predicates are optional; an empty set means any participant
/// may register. Immutable after campaign creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionSet {
    /// Minimum age in whole years, if restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    /// Permitted country code (ISO 3166-1 alpha-2), if restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Whitelisted participant identifiers, if restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<String>>,
}

impl RestrictionSet {
    /// Validate configured values. Called once at campaign creation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Restriction`] for a zero minimum age,
    /// a malformed country code, or an empty/blank whitelist.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(age) = self.min_age {
            if age == 0 {
                return Err(ValidationError::Restriction(
                    "minimum age must be greater than 0".to_string(),
                ));
            }
        }
        if let Some(country) = &self.country {
            if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(ValidationError::Restriction(format!(
                    "country code must be ISO 3166-1 alpha-2 uppercase, got {country:?}"
                )));
            }
        }
        if let Some(whitelist) = &self.whitelist {
            if whitelist.is_empty() {
                return Err(ValidationError::Restriction(
                    "whitelist must not be empty when configured".to_string(),
                ));
            }
            if whitelist.iter().any(|entry| entry.trim().is_empty()) {
                return Err(ValidationError::Restriction(
                    "whitelist entries must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Whether no restriction is configured.
    pub fn is_open(&self) -> bool {
        self.min_age.is_none() && self.country.is_none() && self.whitelist.is_none()
    }

    /// The configured restriction kinds, in the fixed check order
    /// (age, country, whitelist).
    pub fn kinds(&self) -> Vec<RestrictionKind> {
        let mut kinds = Vec::new();
        if self.min_age.is_some() {
            kinds.push(RestrictionKind::Age);
        }
        if self.country.is_some() {
            kinds.push(RestrictionKind::Country);
        }
        if self.whitelist.is_some() {
            kinds.push(RestrictionKind::Whitelist);
        }
        kinds
    }
}
