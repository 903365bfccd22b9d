//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

pub fn count_suit(hand: &[Card], suit: Suit) -> usize {
    hand.iter().filter(|c| c.suit == suit).count()
}

/// Whether `challenger` takes over from the card currently winning a trick.
///
/// Same suit: strictly higher power wins. Different suit: only a trump can
/// take over, and only from a non-trump. A card that is neither the
/// incumbent's suit nor trump never wins, which is what keeps off-suit
/// discards from beating the lead suit.
pub fn card_beats(challenger: Card, incumbent: Card, trump: Option<Suit>) -> bool {
    if challenger.suit == incumbent.suit {
        return challenger.power() > incumbent.power();
    }
    match trump {
        Some(t) => challenger.suit == t && incumbent.suit != t,
        None => false,
    }
}
