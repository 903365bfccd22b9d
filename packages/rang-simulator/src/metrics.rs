//! Per-hand records and running totals for simulation output.

use rang_engine::domain::scoring::RoundResult;
use rang_engine::domain::{Suit, Team};
use serde::Serialize;

/// One scored hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandMetrics {
    pub hand_no: u32,
    pub redeals: u32,
    pub bid_winner: u8,
    pub contract: u8,
    pub trump: Option<Suit>,
    /// Tricks per team, indexed South/North then East/West.
    pub tricks: [u8; 2],
    pub made: bool,
    pub deltas: [i32; 2],
    pub scores: [i32; 2],
}

impl HandMetrics {
    pub fn from_result(
        result: &RoundResult,
        redeals: u32,
        trump: Option<Suit>,
        tricks: [u8; 2],
        scores: [i32; 2],
    ) -> Self {
        Self {
            hand_no: result.hand_no,
            redeals,
            bid_winner: result.bidder,
            contract: result.contract,
            trump,
            tricks,
            made: result.made,
            deltas: result.deltas,
            scores,
        }
    }
}

/// Aggregate over a whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub hands: u32,
    pub made: u32,
    pub failed: u32,
    pub average_contract: f64,
    pub total_redeals: u32,
    pub final_scores: [i32; 2],
    #[serde(skip)]
    contract_total: u64,
}

impl SimulationSummary {
    pub fn record(&mut self, hand: &HandMetrics) {
        self.hands += 1;
        if hand.made {
            self.made += 1;
        } else {
            self.failed += 1;
        }
        self.total_redeals += hand.redeals;
        self.contract_total += u64::from(hand.contract);
        self.average_contract = self.contract_total as f64 / f64::from(self.hands);
        self.final_scores = hand.scores;
    }

    pub fn leader(&self) -> Option<Team> {
        let [sn, ew] = self.final_scores;
        match sn.cmp(&ew) {
            std::cmp::Ordering::Greater => Some(Team::SouthNorth),
            std::cmp::Ordering::Less => Some(Team::EastWest),
            std::cmp::Ordering::Equal => None,
        }
    }
}
