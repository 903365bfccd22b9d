//! Trump selection, per-observer concealment, and the reveal-on-play trigger.

use serde::{Deserialize, Serialize};

use crate::domain::state::{
    require_bid_winner, require_phase, require_seat, BidWinner, GameState, Phase, PlayerId,
    TrumpState,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// What one observer is allowed to know about trump.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "visibility", content = "suit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrumpView {
    /// No trump has been chosen this hand.
    NotChosen,
    /// Chosen but concealed from this observer.
    Hidden,
    /// Concealed from the table; this observer is the bid winner.
    Private(Suit),
    /// Exposed by a trump play; visible to everyone.
    Revealed(Suit),
}

impl TrumpView {
    pub fn suit(self) -> Option<Suit> {
        match self {
            TrumpView::Private(s) | TrumpView::Revealed(s) => Some(s),
            TrumpView::NotChosen | TrumpView::Hidden => None,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, TrumpView::Revealed(_))
    }
}

/// Project the trump state for `observer`. Derived on demand, never stored.
pub fn visible_trump(
    trump: &TrumpState,
    bid_winner: Option<BidWinner>,
    observer: PlayerId,
) -> TrumpView {
    let Some(suit) = trump.suit else {
        return TrumpView::NotChosen;
    };
    if trump.revealed {
        return TrumpView::Revealed(suit);
    }
    match bid_winner {
        Some(w) if w.player == observer => TrumpView::Private(suit),
        _ => TrumpView::Hidden,
    }
}

/// Record the bid winner's trump choice. Exactly once per hand.
pub fn set_trump(state: &mut GameState, who: PlayerId, suit: Suit) -> Result<(), DomainError> {
    require_seat(who)?;
    if state.round.trump.suit.is_some() {
        return Err(DomainError::validation(
            ValidationKind::TrumpAlreadySelected,
            "Trump has already been selected for this hand",
        ));
    }
    require_phase(state, Phase::TrumpSelect)?;
    let winner = require_bid_winner(state, "set_trump")?;
    if winner.player != who {
        return Err(DomainError::validation(
            ValidationKind::NotBidWinner,
            "Only the bid winner may choose trump",
        ));
    }

    state.round.trump = TrumpState {
        suit: Some(suit),
        revealed: false,
    };
    state.phase = Phase::Dealing2;
    state.turn = None;
    Ok(())
}

/// Flip `revealed` when `card` is a trump. Returns true only on the flip itself.
pub fn reveal_on_play(trump: &mut TrumpState, card: Card) -> bool {
    match trump.suit {
        Some(suit) if !trump.revealed && card.suit == suit => {
            trump.revealed = true;
            true
        }
        _ => false,
    }
}
