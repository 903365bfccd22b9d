use crate::domain::state::{BidWinner, Phase, RoundState, Team};
use crate::domain::test_state_helpers::{card, hands, playing_state};
use crate::domain::tricks::{current_winner, legal_moves, play_card, resolve_current_trick};
use crate::domain::Suit;
use crate::errors::domain::ValidationKind;

fn round_with(plays: &[(u8, &str)], trump: Suit) -> RoundState {
    let mut round = RoundState::empty();
    round.trick_plays = plays.iter().map(|&(s, id)| (s, card(id))).collect();
    round.trump.suit = Some(trump);
    round
}

#[test]
fn off_suit_ace_cannot_win() {
    let round = round_with(&[(0, "2C"), (1, "9C"), (2, "AD"), (3, "3C")], Suit::Spades);
    assert_eq!(resolve_current_trick(&round).unwrap(), 1);
}

#[test]
fn any_trump_beats_lead_suit() {
    let round = round_with(&[(0, "KS"), (1, "2H"), (2, "QS"), (3, "AS")], Suit::Hearts);
    assert_eq!(resolve_current_trick(&round).unwrap(), 1);
}

#[test]
fn second_trump_overtakes_first() {
    let round = round_with(&[(2, "AS"), (3, "4D"), (0, "9D"), (1, "3S")], Suit::Diamonds);
    assert_eq!(resolve_current_trick(&round).unwrap(), 0);
}

#[test]
fn partial_trick_is_an_invariant_violation() {
    let round = round_with(&[(0, "KS"), (1, "2H")], Suit::Hearts);
    assert!(resolve_current_trick(&round).unwrap_err().is_invariant());
    assert_eq!(
        current_winner(&round.trick_plays, round.trump.suit).map(|p| p.0),
        Some(1)
    );
    assert_eq!(current_winner(&[], Some(Suit::Hearts)), None);
}

fn small_table() -> crate::domain::GameState {
    let hands = hands([
        &["AS", "KH", "2D"],
        &["QS", "5H", "3C"],
        &["4S", "9H", "JC"],
        &["7C", "8C", "AD"],
    ]);
    playing_state(hands, BidWinner { player: 0, amount: 7 }, Suit::Clubs)
}

#[test]
fn follower_holding_lead_suit_may_not_ruff() {
    let mut state = small_table();
    play_card(&mut state, 0, card("AS")).unwrap();

    assert_eq!(legal_moves(&state, 1), vec![card("QS")]);
    assert!(legal_moves(&state, 2).is_empty());
    let err = play_card(&mut state, 1, card("3C")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::MustFollowSuit));
    let err = play_card(&mut state, 1, card("5H")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::MustFollowSuit));

    assert_eq!(state.hands[1].len(), 3);
    assert_eq!(state.round.trick_plays.len(), 1);
    assert!(!state.round.trump.revealed);
}

#[test]
fn void_follower_may_play_anything() {
    let mut state = small_table();
    play_card(&mut state, 0, card("AS")).unwrap();
    play_card(&mut state, 1, card("QS")).unwrap();
    play_card(&mut state, 2, card("4S")).unwrap();
    assert_eq!(legal_moves(&state, 3).len(), 3);
}

#[test]
fn ruff_reveals_trump_and_wins_trick() {
    let mut state = small_table();
    play_card(&mut state, 0, card("AS")).unwrap();
    play_card(&mut state, 1, card("QS")).unwrap();
    play_card(&mut state, 2, card("4S")).unwrap();
    let r = play_card(&mut state, 3, card("7C")).unwrap();

    assert_eq!(r.trump_revealed, Some(Suit::Clubs));
    assert!(state.round.trump.revealed);
    assert!(r.trick_completed);
    assert_eq!(r.trick_winner, Some(3));
    assert_eq!(r.trick_no_after, 2);
    assert_eq!(state.trick_no, Some(2));
    assert_eq!(state.team_tricks(Team::EastWest), 1);
    assert_eq!(state.turn, Some(3));
    assert_eq!(state.leader, Some(3));
    assert!(state.round.trick_plays.is_empty());
    assert_eq!(state.round.cards_played, 4);
    assert_eq!(state.round.last_trick.as_ref().map(|t| t.winner), Some(3));

    // Later trump plays do not report a second reveal.
    let r = play_card(&mut state, 3, card("8C")).unwrap();
    assert_eq!(r.trump_revealed, None);
    assert!(state.round.trump.revealed);
}

#[test]
fn playing_out_of_turn_or_unheld_card_is_rejected() {
    let mut state = small_table();
    let err = play_card(&mut state, 1, card("QS")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::OutOfTurn));
    let err = play_card(&mut state, 0, card("QS")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::CardNotInHand));
    assert_eq!(state.hands[0].len(), 3);
}

#[test]
fn last_trick_scores_the_round() {
    let hands = hands([&["AS"], &["2S"], &["3S"], &["4S"]]);
    let mut state = playing_state(hands, BidWinner { player: 0, amount: 7 }, Suit::Hearts);
    state.round.team_tricks = [6, 6];
    state.round.cards_played = 48;
    state.trick_no = Some(13);

    for (seat, id) in [(0, "AS"), (1, "2S"), (2, "3S")] {
        let r = play_card(&mut state, seat, card(id)).unwrap();
        assert!(r.round_result.is_none());
    }
    let r = play_card(&mut state, 3, card("4S")).unwrap();
    let result = r.round_result.unwrap();
    assert!(result.made);
    assert_eq!(result.tricks_won, 7);
    assert_eq!(state.phase, Phase::RoundEnd);
    assert_eq!(state.team_scores, [10, 0]);
    assert_eq!(state.round.cards_played, 52);
    assert_eq!(state.turn, None);
}

#[test]
fn playing_outside_trick_phase_is_rejected() {
    let mut state = small_table();
    state.phase = Phase::Bidding;
    let err = play_card(&mut state, 0, card("AS")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));
    assert!(legal_moves(&state, 0).is_empty());
}
