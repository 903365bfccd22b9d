#![allow(dead_code)]

// tests/common/mod.rs
use rand::seq::IndexedRandom;
use rand::Rng;
use rang_engine::ai::{AiError, AiPlayer};
use rang_engine::domain::player_view::PlayerView;
use rang_engine::domain::{Card, Phase, Suit};
use rang_engine::{ActionOutcome, AppError, EngineConfig, GameFlow, PendingAction, SeatKind};

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Four computer seats with the given profile, deterministic for `seed`.
pub fn all_ai_flow(profile: &str, seed: u64) -> GameFlow {
    GameFlow::new(EngineConfig::all_ai(profile).with_seed(seed)).expect("valid config")
}

/// Human at seat 0, heuristic elsewhere.
pub fn human_flow(seed: u64) -> GameFlow {
    GameFlow::new(EngineConfig::default().with_seed(seed)).expect("valid config")
}

/// Config with explicit seat kinds.
pub fn flow_with(seats: [SeatKind; 4], seed: u64) -> GameFlow {
    let config = EngineConfig {
        seats,
        ..EngineConfig::default().with_seed(seed)
    };
    GameFlow::new(config).expect("valid config")
}

/// Take one human action for whichever human seat is on turn, choosing at
/// random among legal options. Returns `None` when no human must act.
pub fn step_human(flow: &mut GameFlow, rng: &mut impl Rng) -> Option<Result<ActionOutcome, AppError>> {
    let (seat, action) = flow.pending_action()?;
    if !flow.seat(seat).is_some_and(|s| s.is_human()) {
        return None;
    }
    let view = flow.view(seat);
    Some(match action {
        PendingAction::Bid => {
            let bid = *view.legal_bids().choose(rng).expect("legal bids");
            flow.submit_bid(seat, bid)
        }
        PendingAction::Trump => {
            let suit = *Suit::ALL.choose(rng).expect("suits");
            flow.submit_trump(seat, suit)
        }
        PendingAction::Play => {
            let card = *view.legal_plays().choose(rng).expect("legal plays");
            flow.submit_play(seat, card)
        }
    })
}

/// Drive human seats with random legal actions until the hand is scored.
pub fn finish_hand(flow: &mut GameFlow, rng: &mut impl Rng) {
    while flow.phase() != Phase::RoundEnd {
        step_human(flow, rng)
            .expect("a human must be on turn before the hand ends")
            .expect("legal action accepted");
    }
}

/// Always passes and always leads its first card; never raises.
pub struct AlwaysPass;

impl AiPlayer for AlwaysPass {
    fn choose_bid(&self, _state: &PlayerView) -> Result<u8, AiError> {
        Ok(0)
    }

    fn choose_trump(&self, _state: &PlayerView) -> Result<Suit, AiError> {
        Ok(Suit::Spades)
    }

    fn choose_play(&self, state: &PlayerView) -> Result<Card, AiError> {
        state
            .hand
            .first()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("empty hand".into()))
    }
}

/// Opens at 7, picks Spades, and always proposes the last card in hand,
/// legal or not.
pub struct Careless;

impl AiPlayer for Careless {
    fn choose_bid(&self, state: &PlayerView) -> Result<u8, AiError> {
        Ok(if state.high_bid.player.is_none() { 7 } else { 0 })
    }

    fn choose_trump(&self, _state: &PlayerView) -> Result<Suit, AiError> {
        Ok(Suit::Spades)
    }

    fn choose_play(&self, state: &PlayerView) -> Result<Card, AiError> {
        state
            .hand
            .last()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("empty hand".into()))
    }
}

/// Fails every decision with an internal error.
pub struct Broken;

impl AiPlayer for Broken {
    fn choose_bid(&self, _state: &PlayerView) -> Result<u8, AiError> {
        Err(AiError::Internal("bid engine unavailable".into()))
    }

    fn choose_trump(&self, _state: &PlayerView) -> Result<Suit, AiError> {
        Err(AiError::Internal("trump engine unavailable".into()))
    }

    fn choose_play(&self, _state: &PlayerView) -> Result<Card, AiError> {
        Err(AiError::Internal("play engine unavailable".into()))
    }
}
