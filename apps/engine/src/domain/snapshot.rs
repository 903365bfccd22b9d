//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::scoring::RoundResult;
use crate::domain::state::{BidWinner, CompletedTrick, GameState, HighBid, Phase, PlayerId};
use crate::domain::trump::{visible_trump, TrumpView};
use crate::domain::Card;

/// Whole-table snapshot as seen by one observer.
///
/// Other seats' cards are reduced to counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub observer: PlayerId,
    pub hand_no: u32,
    pub redeals: u32,
    pub phase: Phase,
    pub turn: Option<PlayerId>,
    pub hand: Vec<Card>,
    pub hand_sizes: [usize; PLAYERS],
    pub trick_plays: Vec<(PlayerId, Card)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_trick: Option<CompletedTrick>,
    pub high_bid: HighBid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_winner: Option<BidWinner>,
    pub trump: TrumpView,
    pub team_tricks: [u8; 2],
    pub team_scores: [i32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_result: Option<RoundResult>,
}

pub fn snapshot(state: &GameState, observer: PlayerId) -> GameSnapshot {
    let round = &state.round;
    GameSnapshot {
        observer,
        hand_no: state.hand_no,
        redeals: state.redeals,
        phase: state.phase,
        turn: state.turn,
        hand: state
            .hands
            .get(observer as usize)
            .cloned()
            .unwrap_or_default(),
        hand_sizes: std::array::from_fn(|i| state.hands[i].len()),
        trick_plays: round.trick_plays.clone(),
        last_trick: round.last_trick.clone(),
        high_bid: round.auction.high_bid,
        bid_winner: round.bid_winner,
        trump: visible_trump(&round.trump, round.bid_winner, observer),
        team_tricks: round.team_tricks,
        team_scores: state.team_scores,
        last_result: state.last_result,
    }
}
