//! Domain-level error type used across the rules engine and the game flow.
//!
//! Two categories exist:
//! - `Validation`: an action broke a protocol rule (wrong turn, bad bid,
//!   suit-following violation, ...). State is left untouched and the caller
//!   gets a distinguishable rejection.
//! - `Invariant`: internal bookkeeping is inconsistent. These indicate a
//!   defect upstream and are never produced by well-formed input.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Kinds of rule violation a submitted action can hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    PhaseMismatch,
    OutOfTurn,
    InvalidBid,
    CardNotInHand,
    MustFollowSuit,
    TrumpAlreadySelected,
    NotBidWinner,
    ParseCard,
    InvalidSeat,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    #[error("validation error ({kind:?}): {detail}")]
    Validation { kind: ValidationKind, detail: String },
    /// Internal invariant broken; not user-recoverable
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation {
            kind: ValidationKind::Other(detail.clone()),
            detail,
        }
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The validation kind, if this is a rule rejection.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation { kind, .. } => Some(kind),
            DomainError::Invariant(_) => None,
        }
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, DomainError::Invariant(_))
    }

    /// Stable error code for callers that branch on the rejection type.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation { kind, .. } => match kind {
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::MustFollowSuit => ErrorCode::MustFollowSuit,
                ValidationKind::TrumpAlreadySelected => ErrorCode::TrumpAlreadySelected,
                ValidationKind::NotBidWinner => ErrorCode::NotBidWinner,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::InvalidSeat => ErrorCode::InvalidSeat,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Invariant(_) => ErrorCode::InvariantViolation,
        }
    }
}
