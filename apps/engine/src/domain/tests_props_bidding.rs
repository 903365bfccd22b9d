use proptest::prelude::*;

use crate::domain::bidding::{place_bid, AuctionOutcome, Bid};
use crate::domain::rules::MIN_BID;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::bidding_state;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: any action sequence either keeps the auction open, closes it on
    /// a bid of at least 7 that beats every other bid, or voids it after four passes.
    #[test]
    fn prop_auction_terminates_soundly(seq in test_gens::bid_sequence(40)) {
        let mut state = bidding_state(Default::default());
        let mut outcome = None;
        for amount in seq {
            let Some(seat) = state.turn else { break };
            let r = place_bid(&mut state, seat, Bid(amount)).unwrap();
            if !matches!(r.outcome, AuctionOutcome::Continue { .. }) {
                outcome = Some(r.outcome);
                break;
            }
        }

        match outcome {
            Some(AuctionOutcome::Won(w)) => {
                prop_assert!(w.amount >= MIN_BID);
                prop_assert_eq!(state.phase, Phase::TrumpSelect);
                prop_assert_eq!(state.turn, Some(w.player));
                let raises: Vec<_> = state.round.auction.history.iter()
                    .filter(|(_, a)| *a > 0)
                    .collect();
                prop_assert_eq!(raises.last().map(|r| r.0), Some(w.player));
                for (_, a) in &raises[..raises.len() - 1] {
                    prop_assert!(*a < w.amount);
                }
                prop_assert!(state.round.auction.consecutive_passes >= 3);
            }
            Some(AuctionOutcome::AllPassed) => {
                prop_assert_eq!(state.phase, Phase::Dealing1);
                prop_assert!(state.round.auction.history.iter().all(|(_, a)| *a == 0));
                prop_assert_eq!(state.round.auction.history.len(), 4);
            }
            _ => {
                prop_assert_eq!(state.phase, Phase::Bidding);
                prop_assert!(state.turn.is_some());
            }
        }
    }

    /// Property: each raise strictly increases the high bid; passes never move it.
    #[test]
    fn prop_high_bid_is_monotonic(seq in test_gens::bid_sequence(20)) {
        let mut state = bidding_state(Default::default());
        let mut prev = state.round.auction.high_bid.amount;
        for amount in seq {
            if state.phase != Phase::Bidding { break; }
            let Some(seat) = state.turn else { break };
            let r = place_bid(&mut state, seat, Bid(amount)).unwrap();
            if r.raised {
                prop_assert!(r.high_bid.amount > prev);
            } else {
                prop_assert_eq!(r.high_bid.amount, prev);
            }
            prev = r.high_bid.amount;
        }
    }
}
