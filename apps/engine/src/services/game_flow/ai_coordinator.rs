use tracing::{debug, warn};

use super::GameFlow;
use crate::ai::AiPlayer;
use crate::domain::events::GameEvent;
use crate::domain::player_view::PlayerView;
use crate::domain::rules::{is_well_formed_bid, PASS};
use crate::domain::state::{Phase, PlayerId};
use crate::error::AppError;
use crate::errors::domain::DomainError;

/// Bound on automatic actions per call; a hand with re-deals needs far fewer.
const MAX_AI_STEPS: usize = 10_000;

/// Type of action needed from a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Bid,
    Trump,
    Play,
}

impl GameFlow {
    /// The seat on turn and the kind of action it owes, if any.
    pub fn pending_action(&self) -> Option<(PlayerId, PendingAction)> {
        let seat = self.state.turn?;
        let action = match self.state.phase {
            Phase::Bidding => PendingAction::Bid,
            Phase::TrumpSelect => PendingAction::Trump,
            Phase::Playing => PendingAction::Play,
            _ => return None,
        };
        Some((seat, action))
    }

    /// Run computer turns until a human must act or nobody can.
    pub(super) fn advance(&mut self, events: &mut Vec<GameEvent>) -> Result<(), AppError> {
        for _ in 0..MAX_AI_STEPS {
            let Some((seat, action)) = self.pending_action() else {
                return Ok(());
            };
            if self.seats[seat as usize].is_human() {
                return Ok(());
            }
            match action {
                PendingAction::Bid => self.run_ai_bid(seat, events)?,
                PendingAction::Trump => self.run_ai_trump(seat, events)?,
                PendingAction::Play => self.run_ai_play(seat, events)?,
            }
        }
        Err(DomainError::invariant(format!(
            "computer seats made no progress after {MAX_AI_STEPS} actions"
        ))
        .into())
    }

    fn ai_view(&self, seat: PlayerId) -> Result<(&(dyn AiPlayer + Send + Sync), PlayerView), AppError> {
        let player = self.seats[seat as usize]
            .player()
            .ok_or_else(|| DomainError::invariant(format!("seat {seat} has no AI player")))?;
        Ok((player, PlayerView::for_seat(&self.state, seat)))
    }

    fn run_ai_bid(&mut self, seat: PlayerId, events: &mut Vec<GameEvent>) -> Result<(), AppError> {
        let (player, view) = self.ai_view(seat)?;
        let mut amount = player.choose_bid(&view)?;
        if !is_well_formed_bid(amount) {
            warn!(seat, amount, "AI proposed malformed bid; passing instead");
            amount = PASS;
        }
        debug!(seat, amount, "AI bid");
        self.apply_bid(seat, amount, events)
    }

    fn run_ai_trump(&mut self, seat: PlayerId, events: &mut Vec<GameEvent>) -> Result<(), AppError> {
        let (player, view) = self.ai_view(seat)?;
        let suit = player.choose_trump(&view)?;
        debug!(seat, "AI chose trump");
        self.apply_trump(seat, suit, events)
    }

    fn run_ai_play(&mut self, seat: PlayerId, events: &mut Vec<GameEvent>) -> Result<(), AppError> {
        let (player, view) = self.ai_view(seat)?;
        let proposed = player.choose_play(&view)?;
        let card = if view.legal_plays().contains(&proposed) {
            proposed
        } else {
            let fallback = view.legal_plays().first().copied().ok_or_else(|| {
                DomainError::invariant(format!("seat {seat} on turn with no legal plays"))
            })?;
            warn!(
                seat,
                proposed = %proposed.id(),
                fallback = %fallback.id(),
                "AI proposed illegal card; substituting first legal card"
            );
            fallback
        };
        debug!(seat, card = %card.id(), "AI play");
        self.apply_play(seat, card, events)
    }
}
