//! Random AI player - makes uniformly random legal moves.
//!
//! Serves as a baseline for simulator comparisons and as a fuzzer for the
//! flow in tests.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::{Card, Suit};

/// AI that chooses uniformly among legal moves.
///
/// `AiPlayer` methods take `&self`, so the RNG sits behind a `Mutex`.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible choices, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(f(&mut rng))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_bid(&self, state: &PlayerView) -> Result<u8, AiError> {
        let legal = state.legal_bids();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal bids available".into()));
        }
        self.with_rng(|rng| legal.choose(rng).copied())?
            .ok_or_else(|| AiError::Internal("Failed to choose bid".into()))
    }

    fn choose_trump(&self, _state: &PlayerView) -> Result<Suit, AiError> {
        self.with_rng(|rng| Suit::ALL.choose(rng).copied())?
            .ok_or_else(|| AiError::Internal("Failed to choose trump".into()))
    }

    fn choose_play(&self, state: &PlayerView) -> Result<Card, AiError> {
        let legal = state.legal_plays();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        self.with_rng(|rng| legal.choose(rng).copied())?
            .ok_or_else(|| AiError::Internal("Failed to choose card".into()))
    }
}
