//! Error codes for the Rang engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes surfaced to callers of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Action validation
    /// Action not allowed in the current phase
    PhaseMismatch,
    /// Not this seat's turn
    OutOfTurn,
    /// Bid amount outside {0, 7..=13}
    InvalidBid,
    /// Card not in hand
    CardNotInHand,
    /// Must follow suit
    MustFollowSuit,
    /// Trump was already chosen for this hand
    TrumpAlreadySelected,
    /// Only the bid winner may choose trump
    NotBidWinner,
    /// Parse card error
    ParseCard,
    /// Seat outside 0..=3
    InvalidSeat,
    /// General validation error
    ValidationError,

    // Engine faults
    /// Internal bookkeeping inconsistent
    InvariantViolation,
    /// AI could not produce a decision
    AiFailure,
    /// Configuration could not be loaded
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string representation of this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::InvalidBid => "INVALID_BID",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::TrumpAlreadySelected => "TRUMP_ALREADY_SELECTED",
            Self::NotBidWinner => "NOT_BID_WINNER",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::AiFailure => "AI_FAILURE",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
