//! Errors for the few fallible member-resolution surfaces.

use thiserror::Error;

/// Errors raised while validating facts or parsing member kinds.
///
/// Classification and documentation synthesis are total and never return
/// these; they only surface from explicit validation entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    /// A fact set contained an absent entry
    #[error("fact entry {index} is missing")]
    MissingFact { index: usize },

    /// A member kind name did not match any known kind
    #[error("unknown member kind '{0}'")]
    UnknownKind(String),
}

/// Result type for member-resolution operations.
pub type MemberResult<T> = Result<T, MemberError>;
