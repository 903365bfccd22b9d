//! Game flow: the single owner of a table's state.
//!
//! Actions validate through the domain layer, then run any non-human turns
//! that follow synchronously until a human must act or the hand ends.

mod ai_coordinator;
mod player_actions;
mod round_lifecycle;
pub mod seats;

use rand::Rng;
use serde::Serialize;
use tracing::warn;

pub use ai_coordinator::PendingAction;
pub use seats::SeatController;

use crate::config::EngineConfig;
use crate::domain::events::{EventLog, GameEvent};
use crate::domain::player_view::PlayerView;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::RoundResult;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::{BidWinner, GameState, HighBid, Phase, PlayerId, Team};
use crate::domain::trump::{visible_trump, TrumpView};
use crate::domain::Card;
use crate::error::AppError;

/// Everything an action changed, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub events: Vec<GameEvent>,
    pub phase: Phase,
    pub turn: Option<PlayerId>,
}

#[derive(Debug)]
pub struct GameFlow {
    config: EngineConfig,
    state: GameState,
    seats: [SeatController; PLAYERS],
    log: EventLog,
    game_seed: u64,
    /// Deals made for the current hand number, re-deals and resets included.
    deal_attempt: u32,
}

impl GameFlow {
    pub fn new(config: EngineConfig) -> Result<Self, AppError> {
        config.validate()?;
        let seats = seats::build_seats(&config.seats, config.seed)?;
        Ok(Self::with_seats(config, seats))
    }

    /// Use caller-built controllers instead of the configured seat kinds.
    pub fn with_seats(config: EngineConfig, seats: [SeatController; PLAYERS]) -> Self {
        let game_seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            log: EventLog::with_capacity(config.event_log_capacity),
            config,
            state: GameState::new(),
            seats,
            game_seed,
            deal_attempt: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    pub fn seat(&self, seat: PlayerId) -> Option<&SeatController> {
        self.seats.get(seat as usize)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn turn(&self) -> Option<PlayerId> {
        self.state.turn
    }

    pub fn hand_no(&self) -> u32 {
        self.state.hand_no
    }

    pub fn redeals(&self) -> u32 {
        self.state.redeals
    }

    pub fn hand(&self, seat: PlayerId) -> &[Card] {
        self.state
            .hands
            .get(seat as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn trick_plays(&self) -> &[(PlayerId, Card)] {
        &self.state.round.trick_plays
    }

    pub fn team_tricks(&self, team: Team) -> u8 {
        self.state.team_tricks(team)
    }

    pub fn team_score(&self, team: Team) -> i32 {
        self.state.team_score(team)
    }

    pub fn high_bid(&self) -> HighBid {
        self.state.round.auction.high_bid
    }

    pub fn bid_winner(&self) -> Option<BidWinner> {
        self.state.round.bid_winner
    }

    pub fn visible_trump(&self, observer: PlayerId) -> TrumpView {
        visible_trump(
            &self.state.round.trump,
            self.state.round.bid_winner,
            observer,
        )
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.state.last_result
    }

    pub fn events(&self) -> &EventLog {
        &self.log
    }

    pub fn latest_notice(&self) -> Option<String> {
        self.log.latest().map(ToString::to_string)
    }

    pub fn view(&self, seat: PlayerId) -> PlayerView {
        PlayerView::for_seat(&self.state, seat)
    }

    pub fn snapshot(&self, observer: PlayerId) -> GameSnapshot {
        snapshot(&self.state, observer)
    }

    /// Run the computer turns that follow an applied action and report the
    /// outcome. Events already applied reach the log even when a computer
    /// turn fails.
    fn settle(&mut self, mut events: Vec<GameEvent>) -> Result<ActionOutcome, AppError> {
        match self.advance(&mut events) {
            Ok(()) => Ok(self.finish(events)),
            Err(e) => {
                warn!(error = %e, applied = events.len(), "Computer turn failed after action");
                self.log.extend(events);
                Err(e)
            }
        }
    }

    fn finish(&mut self, events: Vec<GameEvent>) -> ActionOutcome {
        self.log.extend(events.iter().copied());
        ActionOutcome {
            events,
            phase: self.state.phase,
            turn: self.state.turn,
        }
    }
}
