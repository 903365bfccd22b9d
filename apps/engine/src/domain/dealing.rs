//! Deck construction, shuffling, and the two-phase deal.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{DECK_SIZE, FIRST_DEAL, PLAYERS, SECOND_DEAL};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Generate a full 52-card deck in suit-then-rank enumeration order.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL.iter().rev() {
            deck.push(Card { suit, rank: *rank });
        }
    }
    deck
}

/// Uniform Fisher-Yates shuffle drawing entropy from the caller's RNG.
pub fn shuffle(mut deck: Vec<Card>, rng: &mut impl Rng) -> Vec<Card> {
    deck.shuffle(rng);
    deck
}

/// Stable sort: suit enumeration order first, then descending power.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort_by(|a, b| a.suit.cmp(&b.suit).then(b.rank.cmp(&a.rank)));
}

fn require_full_deck(deck: &[Card]) -> Result<(), DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::invariant(format!(
            "deck must hold {DECK_SIZE} cards, found {}",
            deck.len()
        )));
    }
    Ok(())
}

/// First deal: deck indices 0..20, five per seat in seat order, each hand sorted.
pub fn deal_first(deck: &[Card]) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    require_full_deck(deck)?;
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, hand) in hands.iter_mut().enumerate() {
        let start = seat * FIRST_DEAL;
        let mut dealt = deck[start..start + FIRST_DEAL].to_vec();
        sort_hand(&mut dealt);
        *hand = dealt;
    }
    Ok(hands)
}

/// Second deal: deck indices 20..52, eight per seat appended and re-sorted.
pub fn deal_second(deck: &[Card], hands: &mut [Vec<Card>; PLAYERS]) -> Result<(), DomainError> {
    require_full_deck(deck)?;
    if hands.iter().any(|h| h.len() != FIRST_DEAL) {
        return Err(DomainError::invariant(
            "second deal requires every hand to hold exactly the first-deal cards",
        ));
    }
    let base = PLAYERS * FIRST_DEAL;
    for (seat, hand) in hands.iter_mut().enumerate() {
        let start = base + seat * SECOND_DEAL;
        hand.extend_from_slice(&deck[start..start + SECOND_DEAL]);
        sort_hand(hand);
    }
    Ok(())
}
