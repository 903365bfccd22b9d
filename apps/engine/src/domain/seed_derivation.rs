//! RNG seed derivation utilities for deterministic dealing.
//!
//! A single game seed fans out into one dealing seed per (hand, attempt) pair
//! so that re-deals after an all-pass auction are reproducible too.

/// Derive a seed for dealing one attempt of one hand.
///
/// # Arguments
///
/// * `game_seed` - Base RNG seed for the session
/// * `hand_no` - Hand number (1-based)
/// * `attempt` - Re-deal counter within the hand (0 for the first deal)
pub fn derive_dealing_seed(game_seed: u64, hand_no: u32, attempt: u32) -> u64 {
    // Different multipliers keep hand and attempt contributions apart.
    game_seed
        .wrapping_add((hand_no as u64).wrapping_mul(1_000_000))
        .wrapping_add((attempt as u64).wrapping_mul(1_000))
        .wrapping_add(2)
}
