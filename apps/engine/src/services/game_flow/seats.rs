//! Per-seat controllers: who supplies the action when a seat is on turn.

use std::fmt;

use crate::ai::{by_name, AiPlayer};
use crate::config::SeatKind;
use crate::domain::rules::PLAYERS;
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::error::AppError;

pub enum SeatController {
    /// Actions arrive through the public action entry points.
    Human,
    Ai {
        profile: String,
        player: Box<dyn AiPlayer + Send + Sync>,
    },
}

impl SeatController {
    pub fn ai(profile: impl Into<String>, player: Box<dyn AiPlayer + Send + Sync>) -> Self {
        SeatController::Ai {
            profile: profile.into(),
            player,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, SeatController::Human)
    }

    pub fn profile(&self) -> Option<&str> {
        match self {
            SeatController::Human => None,
            SeatController::Ai { profile, .. } => Some(profile),
        }
    }

    pub fn player(&self) -> Option<&(dyn AiPlayer + Send + Sync)> {
        match self {
            SeatController::Human => None,
            SeatController::Ai { player, .. } => Some(player.as_ref()),
        }
    }
}

impl fmt::Debug for SeatController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatController::Human => f.write_str("Human"),
            SeatController::Ai { profile, .. } => write!(f, "Ai({profile})"),
        }
    }
}

/// Build controllers from configuration.
///
/// A seat without its own seed gets one derived from the game seed, so a
/// seeded game is reproducible end to end.
pub fn build_seats(
    kinds: &[SeatKind; PLAYERS],
    game_seed: Option<u64>,
) -> Result<[SeatController; PLAYERS], AppError> {
    let mut seats: [SeatController; PLAYERS] = std::array::from_fn(|_| SeatController::Human);
    for (i, kind) in kinds.iter().enumerate() {
        if let SeatKind::Ai { profile, seed } = kind {
            let factory = by_name(profile).ok_or_else(|| {
                AppError::config(format!("Unknown AI profile '{profile}' for seat {i}"))
            })?;
            let seat_seed = seed.or_else(|| game_seed.map(|g| derive_dealing_seed(g, 0, i as u32)));
            seats[i] = SeatController::ai(factory.name, (factory.make)(seat_seed));
        }
    }
    Ok(seats)
}
