//! Heuristic: the standard computer opponent.
//!
//! Bidding: estimate trick potential from the longest suit and high-card
//! points, never compete against a partner without a clear margin.
//!
//! Trump selection: the longest suit, ties going to the earlier suit in
//! Spades, Hearts, Clubs, Diamonds order.
//!
//! Play:
//! - On lead: run trumps from the bottom with four or more known trumps,
//!   otherwise lead the top of the first suit group.
//! - Following: duck under a winning partner, else win as cheaply as
//!   possible, else play low.
//! - Void: ruff low if holding trump, else discard the lowest card.
//!
//! Deterministic; the seed is accepted for registry uniformity only.

use crate::ai::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::rules::{MAX_BID, PASS};
use crate::domain::{count_suit, Card, Suit};

/// Base estimate before shape and honours are counted.
const BASE_POTENTIAL: u8 = 6;
const LONG_TRUMP_LEAD: usize = 4;
const OVERBID_GUARD: u8 = 9;
const OVERBID_MIN_HCP: u8 = 10;

#[derive(Clone)]
pub struct Heuristic {
    _seed: Option<u64>,
}

impl Heuristic {
    pub const NAME: &'static str = "heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }

    /// Jack 1, Queen 2, King 3, Ace 4.
    pub fn high_card_points(hand: &[Card]) -> u8 {
        hand.iter()
            .map(|c| c.power())
            .filter(|&p| p >= 11)
            .map(|p| p - 10)
            .sum()
    }

    pub fn trick_potential(hand: &[Card]) -> u8 {
        let hcp = Self::high_card_points(hand);
        let longest = Suit::ALL
            .iter()
            .map(|&s| count_suit(hand, s))
            .max()
            .unwrap_or(0);

        let mut potential = BASE_POTENTIAL;
        if longest >= 3 {
            potential += (longest - 2) as u8;
        }
        if hcp >= 6 {
            potential += 1;
        }
        if hcp >= 9 {
            potential += 1;
        }
        potential
    }

    fn proposed_bid(state: &PlayerView) -> u8 {
        let hcp = Self::high_card_points(&state.hand);
        let potential = Self::trick_potential(&state.hand);
        let high = state.high_bid.amount;

        let bid = if state.high_bid.player == Some(state.partner()) {
            if potential > high + 1 {
                high + 1
            } else {
                PASS
            }
        } else if potential > high {
            if potential > OVERBID_GUARD && hcp < OVERBID_MIN_HCP {
                PASS
            } else {
                potential
            }
        } else {
            PASS
        };

        if bid <= high || bid > MAX_BID {
            PASS
        } else {
            bid
        }
    }

    fn lead(state: &PlayerView) -> Option<Card> {
        if let Some(trump) = state.knows_trump() {
            let trumps = state.cards_of(trump);
            if trumps.len() >= LONG_TRUMP_LEAD {
                return trumps.last().copied();
            }
        }
        state.hand.first().copied()
    }

    fn follow(state: &PlayerView, lead: Suit) -> Option<Card> {
        let suit_cards = state.cards_of(lead);
        if !suit_cards.is_empty() {
            if state.trick_leader_so_far() == Some(state.partner()) {
                return suit_cards.last().copied();
            }
            let table_max = state
                .trick_plays
                .iter()
                .filter(|(_, c)| c.suit == lead)
                .map(|(_, c)| c.power())
                .max()
                .unwrap_or(0);
            let cheapest_winner = suit_cards
                .iter()
                .rev()
                .find(|c| c.power() > table_max)
                .copied();
            return cheapest_winner.or_else(|| suit_cards.last().copied());
        }

        if let Some(trump) = state.trump_in_play {
            if let Some(low_trump) = state.cards_of(trump).last() {
                return Some(*low_trump);
            }
        }
        state.hand.last().copied()
    }
}

impl AiPlayer for Heuristic {
    fn choose_bid(&self, state: &PlayerView) -> Result<u8, AiError> {
        let bid = Self::proposed_bid(state);
        if state.legal_bids().contains(&bid) {
            Ok(bid)
        } else {
            Ok(PASS)
        }
    }

    fn choose_trump(&self, state: &PlayerView) -> Result<Suit, AiError> {
        let mut best = Suit::Spades;
        let mut best_count = 0usize;
        for suit in Suit::ALL {
            let count = count_suit(&state.hand, suit);
            if count > best_count {
                best = suit;
                best_count = count;
            }
        }
        Ok(best)
    }

    fn choose_play(&self, state: &PlayerView) -> Result<Card, AiError> {
        let choice = match state.lead_suit() {
            None => Self::lead(state),
            Some(lead) => Self::follow(state, lead),
        };
        choice.ok_or_else(|| AiError::InvalidMove("No cards in hand".into()))
    }
}
