//! Headless driver: every seat is a computer player and hands run back to back.

use rang_engine::domain::{Phase, Team};
use rang_engine::{AppError, DomainError, EngineConfig, GameFlow, SeatKind};
use tracing::debug;

use crate::metrics::HandMetrics;
use crate::types::AiType;

pub struct Simulator {
    flow: GameFlow,
}

impl Simulator {
    pub fn new(seat_types: [AiType; 4], seed: Option<u64>) -> Result<Self, AppError> {
        let config = EngineConfig {
            seed,
            seats: seat_types.map(|ai| SeatKind::ai(ai.name())),
            ..EngineConfig::default()
        };
        let flow = GameFlow::new(config)?;
        debug!(game_seed = flow.game_seed(), "Simulator ready");
        Ok(Self { flow })
    }

    pub fn game_seed(&self) -> u64 {
        self.flow.game_seed()
    }

    /// Deal and play one complete hand, including any all-pass re-deals.
    pub fn play_hand(&mut self) -> Result<HandMetrics, AppError> {
        match self.flow.phase() {
            Phase::Lobby => self.flow.start_hand()?,
            _ => self.flow.next_hand()?,
        };

        if self.flow.phase() != Phase::RoundEnd {
            return Err(DomainError::invariant(format!(
                "hand {} stopped in {:?} with no human seat",
                self.flow.hand_no(),
                self.flow.phase()
            ))
            .into());
        }
        let result = self
            .flow
            .last_result()
            .ok_or_else(|| DomainError::invariant("scored hand has no result"))?;

        let state = self.flow.state();
        Ok(HandMetrics::from_result(
            &result,
            state.redeals,
            state.round.trump.suit,
            state.round.team_tricks,
            [
                state.team_score(Team::SouthNorth),
                state.team_score(Team::EastWest),
            ],
        ))
    }
}
