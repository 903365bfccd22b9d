use crate::domain::rules::TRICKS_PER_HAND;
use crate::domain::scoring::{apply_round_scoring, score_round};
use crate::domain::state::{BidWinner, Phase, Team};
use crate::domain::test_state_helpers::playing_state;
use crate::domain::Suit;

#[test]
fn made_contract_scores_base_plus_overtricks() {
    // Bid 8, bidding team takes 10.
    let r = score_round(1, BidWinner { player: 0, amount: 8 }, [10, 3]);
    assert!(r.made);
    assert_eq!(r.bid_team, Team::SouthNorth);
    assert_eq!(r.delta(Team::SouthNorth), 12);
    assert_eq!(r.delta(Team::EastWest), 0);
}

#[test]
fn exact_contract_scores_base_only() {
    let r = score_round(1, BidWinner { player: 1, amount: 7 }, [6, 7]);
    assert!(r.made);
    assert_eq!(r.delta(Team::EastWest), 10);
    assert_eq!(r.delta(Team::SouthNorth), 0);
}

#[test]
fn failed_contract_transfers_full_value() {
    // Bid 9, bidding team takes 6.
    let r = score_round(2, BidWinner { player: 3, amount: 9 }, [7, 6]);
    assert!(!r.made);
    assert_eq!(r.tricks_won, 6);
    assert_eq!(r.delta(Team::EastWest), -9);
    assert_eq!(r.delta(Team::SouthNorth), 9);
    assert_eq!(r.headline_points(), 9);
}

#[test]
fn grand_slam_on_thirteen() {
    let r = score_round(1, BidWinner { player: 2, amount: 13 }, [13, 0]);
    assert!(r.made);
    assert_eq!(r.delta(Team::SouthNorth), 10);
}

#[test]
fn apply_accumulates_and_ends_round() {
    let winner = BidWinner { player: 0, amount: 9 };
    let mut state = playing_state(Default::default(), winner, Suit::Spades);
    state.team_scores = [-5, 20];
    state.round.team_tricks = [6, TRICKS_PER_HAND - 6];

    let r = apply_round_scoring(&mut state).unwrap();
    assert!(!r.made);
    assert_eq!(state.team_scores, [-14, 29]);
    assert_eq!(state.phase, Phase::RoundEnd);
    assert_eq!(state.turn, None);
    assert_eq!(state.last_result, Some(r));
}

#[test]
fn scoring_twice_is_an_invariant_violation() {
    let winner = BidWinner { player: 1, amount: 7 };
    let mut state = playing_state(Default::default(), winner, Suit::Clubs);
    state.round.team_tricks = [5, 8];
    apply_round_scoring(&mut state).unwrap();
    let before = state.team_scores;
    let err = apply_round_scoring(&mut state).unwrap_err();
    assert!(err.is_invariant());
    assert_eq!(state.team_scores, before);
}

#[test]
fn scoring_before_all_tricks_is_an_invariant_violation() {
    let winner = BidWinner { player: 1, amount: 7 };
    let mut state = playing_state(Default::default(), winner, Suit::Clubs);
    state.round.team_tricks = [5, 5];
    assert!(apply_round_scoring(&mut state).unwrap_err().is_invariant());
}
