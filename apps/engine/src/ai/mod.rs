//! Non-human players.
//!
//! This module provides:
//! - the [`AiPlayer`] trait every seat strategy implements
//! - [`Heuristic`]: the table's standard computer opponent
//! - [`RandomPlayer`]: uniformly random legal moves (seedable for tests)
//! - a static registry for constructing players by name

mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
pub use trait_def::{AiError, AiPlayer};
