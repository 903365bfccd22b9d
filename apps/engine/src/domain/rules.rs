use std::ops::RangeInclusive;

pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;

/// Cards dealt to each seat before the auction.
pub const FIRST_DEAL: usize = 5;
/// Cards dealt to each seat after trump selection.
pub const SECOND_DEAL: usize = 8;
pub const HAND_SIZE: usize = FIRST_DEAL + SECOND_DEAL;
pub const TRICKS_PER_HAND: u8 = HAND_SIZE as u8;

/// Explicit pass.
pub const PASS: u8 = 0;
/// Starting high bid; never winnable, so the first real bid of 7 qualifies.
pub const BID_FLOOR: u8 = 6;
pub const MIN_BID: u8 = 7;
pub const MAX_BID: u8 = 13;

/// Consecutive non-raising actions that close an auction with a high bidder.
pub const PASSES_TO_CLOSE: u8 = 3;
/// Consecutive passes that void a hand when nobody has bid.
pub const PASSES_TO_REDEAL: u8 = 4;

/// Points for making the contract; overtricks add one each.
pub const CONTRACT_BONUS: i32 = 10;

pub fn valid_bid_range() -> RangeInclusive<u8> {
    MIN_BID..=MAX_BID
}

/// Well-formed bid amounts: an explicit pass or a contract of 7..=13.
pub fn is_well_formed_bid(amount: u8) -> bool {
    amount == PASS || valid_bid_range().contains(&amount)
}
