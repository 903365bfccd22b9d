// Proptest generators for domain types.
// Cards are drawn from a shuffled deck so uniqueness holds by construction.

use proptest::prelude::*;

use crate::domain::dealing::build_deck;
use crate::domain::{Card, PlayerId, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// A vector of `count` distinct cards.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all = build_deck();
        let n = count.min(all.len());
        for i in 0..n {
            let j = rng.random_range(i..all.len());
            all.swap(i, j);
        }
        all.truncate(n);
        all
    })
}

pub fn player_id() -> impl Strategy<Value = PlayerId> {
    0u8..=3u8
}

/// A full trick led by a random seat, seats in rotation.
pub fn complete_trick() -> impl Strategy<Value = Vec<(PlayerId, Card)>> {
    (player_id(), unique_cards(4)).prop_map(|(leader, cards)| {
        cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| ((leader + i as u8) % 4, card))
            .collect()
    })
}

/// A full trick where the trump suit differs from the lead suit.
pub fn trick_with_foreign_trump() -> impl Strategy<Value = (Vec<(PlayerId, Card)>, Suit)> {
    complete_trick().prop_flat_map(|plays| {
        let lead = plays[0].1.suit;
        let others: Vec<Suit> = Suit::ALL.into_iter().filter(|&s| s != lead).collect();
        (Just(plays), proptest::sample::select(others))
    })
}

/// A sequence of auction actions: 0 for pass or an amount in 7..=13.
pub fn bid_sequence(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![3 => Just(0u8), 2 => 7u8..=13u8],
        1..=max_len,
    )
}
