// SPDX-License-Identifier: BUSL-1.1
//! Core validation errors.

use thiserror::Error;

/// Error raised when domain data fails construction-time validation.
///
/// Every invalid state is rejected at the constructor — there is no
/// half-built `Campaign` or `VotingWindow` to defend against later.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The option list is too short, or contains duplicates or blanks.
    #[error("invalid option list: {0}")]
    OptionList(String),

    /// The voting window is inverted or degenerate.
    #[error("invalid voting window: {0}")]
    Window(String),

    /// A restriction is configured with an unusable value.
    #[error("invalid restriction: {0}")]
    Restriction(String),
}
