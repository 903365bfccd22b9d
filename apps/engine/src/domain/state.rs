use serde::{Deserialize, Serialize};

use crate::domain::rules::{BID_FLOOR, PLAYERS};
use crate::domain::scoring::RoundResult;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = u8; // 0..=3
pub type Seat = u8; // 0..=3, positional alias for PlayerId

/// The seat driven by the local human player.
pub const HUMAN_SEAT: PlayerId = 0;

/// Phase sequence for one hand.
///
/// `Dealing1` and `Dealing2` are transient: the flow enters them, deals, and
/// advances in the same action.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Idle before the first hand.
    Lobby,
    /// Building, shuffling and dealing five cards per seat.
    Dealing1,
    /// Auction in fixed rotation from seat 0.
    Bidding,
    /// Bid winner chooses the (concealed) trump suit.
    TrumpSelect,
    /// Dealing the remaining eight cards per seat.
    Dealing2,
    /// Trick loop; the bid winner leads the first trick.
    Playing,
    /// Hand scored; waiting for "next hand".
    RoundEnd,
}

/// Partnerships: seats 0/2 (South/North) and 1/3 (East/West).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    SouthNorth,
    EastWest,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::SouthNorth, Team::EastWest];

    pub fn of(seat: PlayerId) -> Self {
        if seat % 2 == 0 {
            Team::SouthNorth
        } else {
            Team::EastWest
        }
    }

    pub fn index(self) -> usize {
        match self {
            Team::SouthNorth => 0,
            Team::EastWest => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Team::SouthNorth => Team::EastWest,
            Team::EastWest => Team::SouthNorth,
        }
    }
}

/// Highest accepted bid so far; starts at the unwinnable floor.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct HighBid {
    pub player: Option<PlayerId>,
    pub amount: u8,
}

impl HighBid {
    pub const fn floor() -> Self {
        Self {
            player: None,
            amount: BID_FLOOR,
        }
    }
}

/// The bid that closed the auction. Fixed for the rest of the hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BidWinner {
    pub player: PlayerId,
    pub amount: u8,
}

impl BidWinner {
    pub fn team(self) -> Team {
        Team::of(self.player)
    }
}

/// Auction bookkeeping for the current deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionState {
    pub high_bid: HighBid,
    /// Non-raising actions since the last raise.
    pub consecutive_passes: u8,
    /// Every action in order: (seat, amount) with 0 for a pass.
    pub history: Vec<(PlayerId, u8)>,
}

impl AuctionState {
    pub fn new() -> Self {
        Self {
            high_bid: HighBid::floor(),
            consecutive_passes: 0,
            history: Vec::new(),
        }
    }
}

impl Default for AuctionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Trump suit and whether it has been exposed by a play.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct TrumpState {
    pub suit: Option<Suit>,
    pub revealed: bool,
}

/// A finished trick kept for display until the next one completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub plays: Vec<(PlayerId, Card)>,
    pub winner: PlayerId,
}

/// Per-hand state: auction, trump, trick buffer, trick counters.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Shuffled deck for this deal; the second deal reads indices 20..52.
    pub deck: Vec<Card>,
    pub auction: AuctionState,
    pub bid_winner: Option<BidWinner>,
    pub trump: TrumpState,
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(PlayerId, Card)>,
    /// Tricks taken this hand, indexed by `Team::index`.
    pub team_tricks: [u8; 2],
    /// Cards that have left hands and been gathered into completed tricks.
    pub cards_played: u8,
    pub last_trick: Option<CompletedTrick>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            deck: Vec::new(),
            auction: AuctionState::new(),
            bid_winner: None,
            trump: TrumpState::default(),
            trick_plays: Vec::with_capacity(PLAYERS),
            team_tricks: [0; 2],
            cards_played: 0,
            last_trick: None,
        }
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.trick_plays.first().map(|&(_, c)| c.suit)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::empty()
    }
}

/// The single authoritative game aggregate threaded through every operation.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// Hand number, 1-based; 0 while in the lobby. Re-deals keep the number.
    pub hand_no: u32,
    /// Re-deals of the current hand after all-pass auctions.
    pub redeals: u32,
    /// Players' hands.
    pub hands: [Vec<Card>; PLAYERS],
    /// Seat expected to act; `None` when nobody can act.
    pub turn: Option<PlayerId>,
    /// Seat that led the current trick (only meaningful while playing).
    pub leader: Option<PlayerId>,
    /// Current trick number (1-based) while playing.
    pub trick_no: Option<u8>,
    /// Cumulative scores across hands, indexed by `Team::index`.
    pub team_scores: [i32; 2],
    pub round: RoundState,
    /// Result of the most recently scored hand.
    pub last_result: Option<RoundResult>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Lobby,
            hand_no: 0,
            redeals: 0,
            hands: Default::default(),
            turn: None,
            leader: None,
            trick_no: None,
            team_scores: [0; 2],
            round: RoundState::empty(),
            last_result: None,
        }
    }

    pub fn team_score(&self, team: Team) -> i32 {
        self.team_scores[team.index()]
    }

    pub fn team_tricks(&self, team: Team) -> u8 {
        self.round.team_tricks[team.index()]
    }

    /// Cards still in hands plus the trick buffer plus gathered cards.
    pub fn cards_accounted(&self) -> usize {
        self.hands.iter().map(Vec::len).sum::<usize>()
            + self.round.trick_plays.len()
            + self.round.cards_played as usize
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8) -> PlayerId {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as PlayerId
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    seat_offset(p, 1)
}

/// Partner across the table: (seat + 2) mod 4.
#[inline]
pub fn partner(p: PlayerId) -> PlayerId {
    seat_offset(p, 2)
}

/// Table position name used in notices.
pub fn seat_name(seat: PlayerId) -> &'static str {
    match seat {
        0 => "You",
        1 => "East",
        2 => "North",
        3 => "West",
        _ => "Unknown",
    }
}

pub fn require_seat(seat: PlayerId) -> Result<PlayerId, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Seat {seat} is not at the table"),
        ))
    }
}

pub fn require_phase(state: &GameState, expected: Phase) -> Result<(), DomainError> {
    if state.phase != expected {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Expected phase {expected:?}, game is in {:?}", state.phase),
        ));
    }
    Ok(())
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    state
        .turn
        .ok_or_else(|| DomainError::invariant(format!("turn must be set ({ctx})")))
}

pub fn require_bid_winner(state: &GameState, ctx: &'static str) -> Result<BidWinner, DomainError> {
    state
        .round
        .bid_winner
        .ok_or_else(|| DomainError::invariant(format!("bid winner must be set ({ctx})")))
}

pub fn require_trump(state: &GameState, ctx: &'static str) -> Result<Suit, DomainError> {
    state
        .round
        .trump
        .suit
        .ok_or_else(|| DomainError::invariant(format!("trump must be set ({ctx})")))
}

pub fn require_trick_no(state: &GameState, ctx: &'static str) -> Result<u8, DomainError> {
    state
        .trick_no
        .ok_or_else(|| DomainError::invariant(format!("trick_no must be set ({ctx})")))
}

/// Reject an action from anyone but the seat on turn.
pub fn require_actor(state: &GameState, who: PlayerId, ctx: &'static str) -> Result<(), DomainError> {
    require_seat(who)?;
    let turn = require_turn(state, ctx)?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }
    Ok(())
}
