//! Test-only game state builders for domain unit tests.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{
    BidWinner, GameState, Phase, PlayerId, RoundState, TrumpState,
};
use crate::domain::{Card, Suit};

/// A state in the Bidding phase with seat 0 on turn.
pub fn bidding_state(hands: [Vec<Card>; PLAYERS]) -> GameState {
    GameState {
        phase: Phase::Bidding,
        hand_no: 1,
        hands,
        turn: Some(0),
        round: RoundState::empty(),
        ..GameState::new()
    }
}

/// A state in the Playing phase at trick 1, led by the bid winner.
pub fn playing_state(
    hands: [Vec<Card>; PLAYERS],
    winner: BidWinner,
    trump: Suit,
) -> GameState {
    let mut round = RoundState::empty();
    round.bid_winner = Some(winner);
    round.trump = TrumpState {
        suit: Some(trump),
        revealed: false,
    };
    GameState {
        phase: Phase::Playing,
        hand_no: 1,
        hands,
        turn: Some(winner.player),
        leader: Some(winner.player),
        trick_no: Some(1),
        round,
        ..GameState::new()
    }
}

/// Parse four hands from identifier lists; panics on malformed input.
pub fn hands(ids: [&[&str]; PLAYERS]) -> [Vec<Card>; PLAYERS] {
    ids.map(|list| try_parse_cards(list.iter()).expect("test hand parses"))
}

pub fn card(id: &str) -> Card {
    id.parse().expect("test card parses")
}

pub fn seats_in_order(from: PlayerId) -> [PlayerId; PLAYERS] {
    std::array::from_fn(|i| (from + i as u8) % PLAYERS as u8)
}
