//! Domain-level error type for roster and round-entry checks.
//!
//! This error type is storage-agnostic. Engine operations return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which sanity check a validation failure came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Roster has fewer than 3 or more than 6 non-blank names.
    RosterSize,
    /// A bid/trick sequence does not have one entry per player.
    EntryLength,
    /// A bid is outside `0..=current_round`.
    BidOutOfRange,
    /// Tricks won do not add up to the round number.
    TrickSum,
    /// The final round has already been scored.
    GameComplete,
    /// A persisted state breaks a structural invariant.
    Invariant,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Invariant, detail.into())
    }

    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
