//! Serialization and deserialization for card types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit};

/// Upper-case wire names, e.g. `"HEARTS"`.
fn suit_wire_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "SPADES",
        Suit::Hearts => "HEARTS",
        Suit::Clubs => "CLUBS",
        Suit::Diamonds => "DIAMONDS",
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(suit_wire_name(*self))
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Suit::ALL
            .into_iter()
            .find(|s| suit_wire_name(*s) == raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown suit {raw:?}")))
    }
}

// Cards travel as their identifier ("AS", "10C").
impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse::<Card>()
            .map_err(serde::de::Error::custom)
    }
}
