//! Auction protocol: fixed rotation, strict raises, pass-count termination.

use crate::domain::rules::{
    is_well_formed_bid, MAX_BID, MIN_BID, PASS, PASSES_TO_CLOSE, PASSES_TO_REDEAL,
};
use crate::domain::state::{
    next_player, require_actor, require_phase, BidWinner, GameState, HighBid, Phase, PlayerId,
};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bid(pub u8);

impl Bid {
    pub const PASS: Bid = Bid(PASS);

    pub fn is_pass(self) -> bool {
        self.0 == PASS
    }
}

/// What the auction does after an action.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AuctionOutcome {
    /// Still open; `next` is on turn.
    Continue { next: PlayerId },
    /// Closed on the standing high bid.
    Won(BidWinner),
    /// Nobody ever raised; the hand is void and must be re-dealt.
    AllPassed,
}

/// Result of placing a bid, describing what state changes occurred.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PlaceBidResult {
    /// Whether the action raised the high bid (otherwise it counted as a pass).
    pub raised: bool,
    pub high_bid: HighBid,
    pub outcome: AuctionOutcome,
}

/// Amounts `who` may submit right now: a pass plus every raise up to 13.
///
/// Empty when it is not `who`'s turn to bid.
pub fn legal_bids(state: &GameState, who: PlayerId) -> Vec<u8> {
    if state.phase != Phase::Bidding || state.turn != Some(who) {
        return Vec::new();
    }
    let lowest_raise = (state.round.auction.high_bid.amount + 1).max(MIN_BID);
    std::iter::once(PASS)
        .chain(lowest_raise..=MAX_BID)
        .collect()
}

/// Place a bid (or pass) for the seat on turn.
///
/// A well-formed amount that does not exceed the high bid is recorded as a
/// pass. Malformed amounts are rejected without touching state.
pub fn place_bid(
    state: &mut GameState,
    who: PlayerId,
    bid: Bid,
) -> Result<PlaceBidResult, DomainError> {
    require_phase(state, Phase::Bidding)?;
    require_actor(state, who, "place_bid")?;
    if !is_well_formed_bid(bid.0) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("Bid must be 0 (pass) or {MIN_BID}..={MAX_BID}, got {}", bid.0),
        ));
    }

    let auction = &mut state.round.auction;
    let raised = bid.0 > auction.high_bid.amount;
    if raised {
        auction.high_bid = HighBid {
            player: Some(who),
            amount: bid.0,
        };
        auction.consecutive_passes = 0;
        auction.history.push((who, bid.0));
    } else {
        auction.consecutive_passes += 1;
        auction.history.push((who, PASS));
    }

    let high_bid = auction.high_bid;
    let passes = auction.consecutive_passes;

    let outcome = match high_bid.player {
        Some(player) if passes >= PASSES_TO_CLOSE => {
            let winner = BidWinner {
                player,
                amount: high_bid.amount,
            };
            state.round.bid_winner = Some(winner);
            state.phase = Phase::TrumpSelect;
            state.turn = Some(player);
            AuctionOutcome::Won(winner)
        }
        None if passes >= PASSES_TO_REDEAL => {
            state.phase = Phase::Dealing1;
            state.turn = None;
            AuctionOutcome::AllPassed
        }
        _ => {
            let next = next_player(who);
            state.turn = Some(next);
            AuctionOutcome::Continue { next }
        }
    };

    Ok(PlaceBidResult {
        raised,
        high_bid,
        outcome,
    })
}
