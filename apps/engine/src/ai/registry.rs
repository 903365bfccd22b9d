//! Static table of computer players selectable by profile name.
//!
//! The first entry is the default profile. A seeded player must make the same
//! choices for the same views.

use crate::ai::{AiPlayer, Heuristic, RandomPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

/// Name of the profile used when none is configured.
pub fn default_profile() -> &'static str {
    Heuristic::NAME
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(RandomPlayer::new(seed))
}

fn make_heuristic(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(Heuristic::new(seed))
}
