use tracing::debug;

use super::{ActionOutcome, GameFlow};
use crate::domain::state::{require_seat, PlayerId};
use crate::domain::{Card, Suit};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlow {
    /// Bid `amount` (0 to pass, else 7..=13) for a human seat on its turn.
    pub fn submit_bid(&mut self, seat: PlayerId, amount: u8) -> Result<ActionOutcome, AppError> {
        self.require_human(seat)?;
        let mut events = Vec::new();
        self.apply_bid(seat, amount, &mut events)?;
        self.settle(events)
    }

    /// Choose trump for a human bid winner.
    pub fn submit_trump(&mut self, seat: PlayerId, suit: Suit) -> Result<ActionOutcome, AppError> {
        self.require_human(seat)?;
        let mut events = Vec::new();
        self.apply_trump(seat, suit, &mut events)?;
        self.settle(events)
    }

    /// Play a card for a human seat on its turn.
    pub fn submit_play(&mut self, seat: PlayerId, card: Card) -> Result<ActionOutcome, AppError> {
        self.require_human(seat)?;
        let mut events = Vec::new();
        self.apply_play(seat, card, &mut events)?;
        self.settle(events)
    }

    /// Play a card by identifier, e.g. `"10S"` or `"QH"`.
    pub fn submit_play_id(&mut self, seat: PlayerId, card_id: &str) -> Result<ActionOutcome, AppError> {
        let card: Card = card_id.parse()?;
        self.submit_play(seat, card)
    }

    fn require_human(&self, seat: PlayerId) -> Result<(), AppError> {
        require_seat(seat)?;
        if self.seats[seat as usize].is_human() {
            return Ok(());
        }
        debug!(seat, "Rejected action for computer-controlled seat");
        Err(DomainError::validation(
            ValidationKind::Other("SEAT_NOT_HUMAN".into()),
            format!("Seat {seat} is not controlled by a human"),
        )
        .into())
    }
}
