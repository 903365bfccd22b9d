use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::dealing::{build_deck, deal_first, deal_second, shuffle};
use crate::domain::rules::{DECK_SIZE, TRICKS_PER_HAND};
use crate::domain::state::{BidWinner, GameState, Phase, RoundState, TrumpState};
use crate::domain::tricks::{legal_moves, play_card};
use crate::domain::{test_gens, test_prelude, Suit};

/// Deal a full hand from `seed` and put it straight into trick play.
fn dealt_hand(seed: u64, bidder: u8, trump: Suit) -> GameState {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let deck = shuffle(build_deck(), &mut rng);
    let mut hands = deal_first(&deck).unwrap();
    deal_second(&deck, &mut hands).unwrap();

    let mut round = RoundState::empty();
    round.deck = deck;
    round.bid_winner = Some(BidWinner {
        player: bidder,
        amount: 7,
    });
    round.trump = TrumpState {
        suit: Some(trump),
        revealed: false,
    };
    GameState {
        phase: Phase::Playing,
        hand_no: 1,
        hands,
        turn: Some(bidder),
        leader: Some(bidder),
        trick_no: Some(1),
        round,
        ..GameState::new()
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: playing random legal cards conserves all 52 cards, reveal is
    /// monotonic, and the hand ends scored after exactly 13 tricks.
    #[test]
    fn prop_full_hand_conserves_cards(
        seed in any::<u64>(),
        bidder in test_gens::player_id(),
        trump in test_gens::suit(),
    ) {
        let mut state = dealt_hand(seed, bidder, trump);
        let mut rng = ChaCha20Rng::seed_from_u64(seed ^ 0x5eed);
        let mut was_revealed = false;
        let mut tricks = 0u8;

        prop_assert_eq!(state.cards_accounted(), DECK_SIZE);
        while state.phase == Phase::Playing {
            let seat = state.turn.unwrap();
            let legal = legal_moves(&state, seat);
            prop_assert!(!legal.is_empty());
            let card = legal[rng.random_range(0..legal.len())];
            let r = play_card(&mut state, seat, card).unwrap();

            prop_assert_eq!(state.cards_accounted(), DECK_SIZE);
            if was_revealed {
                prop_assert!(state.round.trump.revealed);
                prop_assert!(r.trump_revealed.is_none());
            }
            if card.suit == trump {
                prop_assert!(state.round.trump.revealed);
            }
            was_revealed = state.round.trump.revealed;
            if r.trick_completed {
                tricks += 1;
            }
        }

        prop_assert_eq!(tricks, TRICKS_PER_HAND);
        prop_assert_eq!(state.phase, Phase::RoundEnd);
        prop_assert_eq!(state.round.team_tricks.iter().sum::<u8>(), TRICKS_PER_HAND);
        prop_assert!(state.hands.iter().all(Vec::is_empty));
        prop_assert!(state.last_result.is_some());
    }

    /// Property: when a follower holds the lead suit, every legal play is of that suit.
    #[test]
    fn prop_legal_moves_follow_suit(
        seed in any::<u64>(),
        bidder in test_gens::player_id(),
        trump in test_gens::suit(),
    ) {
        let mut state = dealt_hand(seed, bidder, trump);
        let lead = state.hands[bidder as usize][0];
        play_card(&mut state, bidder, lead).unwrap();

        let follower = state.turn.unwrap();
        let hand = &state.hands[follower as usize];
        let legal = legal_moves(&state, follower);
        if hand.iter().any(|c| c.suit == lead.suit) {
            prop_assert!(legal.iter().all(|c| c.suit == lead.suit));
        } else {
            prop_assert_eq!(legal.len(), hand.len());
        }
    }
}
