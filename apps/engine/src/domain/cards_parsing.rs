//! Card parsing from identifier strings (e.g., "AS", "10H", "TD")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "S" | "SPADES" => Ok(Suit::Spades),
            "H" | "HEARTS" => Ok(Suit::Hearts),
            "C" | "CLUBS" => Ok(Suit::Clubs),
            "D" | "DIAMONDS" => Ok(Suit::Diamonds),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Invalid suit: {s}"),
            )),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Suit is always the final character; everything before it is the rank.
        let mut chars = s.chars();
        let suit_ch = chars.next_back().ok_or_else(|| parse_error(s))?;
        let rank_str = chars.as_str();

        let rank = match rank_str {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(parse_error(s)),
        };
        let suit = match suit_ch {
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            _ => return Err(parse_error(s)),
        };
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "10C") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
