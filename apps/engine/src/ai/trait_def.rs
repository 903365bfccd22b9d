//! AI player trait definition.

use crate::domain::player_view::PlayerView;
use crate::domain::{Card, Suit};

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("AI internal error: {0}")]
    Internal(String),
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// A seat strategy. The engine calls exactly one method per turn the seat owns.
///
/// Implementations should pick from [`PlayerView::legal_bids`] and
/// [`PlayerView::legal_plays`]; an illegal card is replaced by the engine with
/// the first legal one.
pub trait AiPlayer: Send + Sync {
    /// Return 0 to pass, or an amount in 7..=13.
    fn choose_bid(&self, state: &PlayerView) -> Result<u8, AiError>;

    /// Called only for the bid winner, once per hand.
    fn choose_trump(&self, state: &PlayerView) -> Result<Suit, AiError>;

    fn choose_play(&self, state: &PlayerView) -> Result<Card, AiError>;
}
