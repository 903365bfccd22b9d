//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod events;
pub mod player_view;

pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
#[cfg(test)]
mod test_state_helpers;
pub mod tricks;
pub mod trump;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, count_suit, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{build_deck, shuffle, sort_hand};
pub use events::{EventLog, GameEvent};
pub use player_view::PlayerView;
pub use rules::valid_bid_range;
pub use seed_derivation::derive_dealing_seed;
pub use state::{GameState, Phase, PlayerId, Team};
pub use trump::{visible_trump, TrumpView};
