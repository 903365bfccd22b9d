use serde::{Deserialize, Serialize};

use crate::domain::rules::{CONTRACT_BONUS, TRICKS_PER_HAND};
use crate::domain::state::{require_bid_winner, BidWinner, GameState, Phase, PlayerId, Team};
use crate::errors::domain::DomainError;

/// Outcome of one scored hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub hand_no: u32,
    pub bidder: PlayerId,
    pub bid_team: Team,
    pub contract: u8,
    /// Tricks the bidding team took.
    pub tricks_won: u8,
    pub made: bool,
    /// Score change per team, indexed by `Team::index`.
    pub deltas: [i32; 2],
}

impl RoundResult {
    pub fn delta(&self, team: Team) -> i32 {
        self.deltas[team.index()]
    }

    /// Points shown in the hand's closing notice.
    pub fn headline_points(&self) -> i32 {
        self.delta(self.bid_team).abs()
    }
}

/// Score a finished hand.
///
/// Made: the bidding team gains 10 plus one per overtrick. Failed: it loses the
/// contract and the defenders gain the same amount.
pub fn score_round(hand_no: u32, winner: BidWinner, team_tricks: [u8; 2]) -> RoundResult {
    let bid_team = winner.team();
    let tricks_won = team_tricks[bid_team.index()];
    let contract = winner.amount;
    let made = tricks_won >= contract;

    let mut deltas = [0i32; 2];
    if made {
        deltas[bid_team.index()] = CONTRACT_BONUS + i32::from(tricks_won - contract);
    } else {
        deltas[bid_team.index()] = -i32::from(contract);
        deltas[bid_team.other().index()] = i32::from(contract);
    }

    RoundResult {
        hand_no,
        bidder: winner.player,
        bid_team,
        contract,
        tricks_won,
        made,
        deltas,
    }
}

/// Apply per-hand scoring once all 13 tricks are in and transition to RoundEnd.
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundResult, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::invariant(format!(
            "scoring requested in phase {:?}",
            state.phase
        )));
    }
    let total: u8 = state.round.team_tricks.iter().sum();
    if total != TRICKS_PER_HAND {
        return Err(DomainError::invariant(format!(
            "scoring requested after {total} tricks"
        )));
    }
    let winner = require_bid_winner(state, "apply_round_scoring")?;

    let result = score_round(state.hand_no, winner, state.round.team_tricks);
    for team in Team::ALL {
        state.team_scores[team.index()] += result.delta(team);
    }
    state.last_result = Some(result);
    state.phase = Phase::RoundEnd;
    state.turn = None;
    state.trick_no = None;
    Ok(result)
}
