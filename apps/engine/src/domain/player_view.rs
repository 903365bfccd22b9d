//! Player view of game state - what information is visible to one seat.

use crate::domain::bidding::legal_bids;
use crate::domain::cards_logic::count_suit;
use crate::domain::state::{partner, BidWinner, GameState, HighBid, Phase, PlayerId, Team};
use crate::domain::tricks::{current_winner, legal_moves};
use crate::domain::trump::{visible_trump, TrumpView};
use crate::domain::{Card, Suit};

/// Information visible to a seat at a decision point.
///
/// This is the interface between the engine and non-human players: every
/// [`crate::ai::AiPlayer`] method receives one. Use [`legal_bids`](Self::legal_bids)
/// and [`legal_plays`](Self::legal_plays) rather than re-deriving the rules.
#[derive(Debug, Clone)]
pub struct PlayerView {
    /// The observing seat (0-3).
    pub seat: PlayerId,
    pub phase: Phase,
    pub turn: Option<PlayerId>,
    pub hand_no: u32,

    /// Your hand, sorted by suit group then descending power.
    pub hand: Vec<Card>,

    /// Cards played in the current trick, lead first.
    pub trick_plays: Vec<(PlayerId, Card)>,

    pub high_bid: HighBid,
    pub bid_winner: Option<BidWinner>,

    /// Trump as this seat is allowed to see it.
    pub trump: TrumpView,

    /// The trump suit tricks are resolved with, regardless of concealment.
    ///
    /// Only follow and ruff decisions consult it; leading trump requires
    /// [`knows_trump`](Self::knows_trump).
    pub trump_in_play: Option<Suit>,

    pub team_tricks: [u8; 2],
    pub team_scores: [i32; 2],

    legal_bids: Vec<u8>,
    legal_plays: Vec<Card>,
}

impl PlayerView {
    pub fn for_seat(state: &GameState, seat: PlayerId) -> Self {
        let round = &state.round;
        Self {
            seat,
            phase: state.phase,
            turn: state.turn,
            hand_no: state.hand_no,
            hand: state.hands.get(seat as usize).cloned().unwrap_or_default(),
            trick_plays: round.trick_plays.clone(),
            high_bid: round.auction.high_bid,
            bid_winner: round.bid_winner,
            trump: visible_trump(&round.trump, round.bid_winner, seat),
            trump_in_play: round.trump.suit,
            team_tricks: round.team_tricks,
            team_scores: state.team_scores,
            legal_bids: legal_bids(state, seat),
            legal_plays: legal_moves(state, seat),
        }
    }

    /// Amounts this seat may submit now (0 = pass). Empty when not bidding.
    pub fn legal_bids(&self) -> &[u8] {
        &self.legal_bids
    }

    /// Cards this seat may play now, in hand order. Empty off turn or outside the trick phase.
    pub fn legal_plays(&self) -> &[Card] {
        &self.legal_plays
    }

    pub fn partner(&self) -> PlayerId {
        partner(self.seat)
    }

    pub fn team(&self) -> Team {
        Team::of(self.seat)
    }

    pub fn is_bid_winner(&self) -> bool {
        self.bid_winner.is_some_and(|w| w.player == self.seat)
    }

    /// Trump suit if this seat may act on it: revealed, or its own choice.
    pub fn knows_trump(&self) -> Option<Suit> {
        self.trump.suit()
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.trick_plays.first().map(|&(_, c)| c.suit)
    }

    /// Seat currently holding the trick, resolved with the trump in play.
    pub fn trick_leader_so_far(&self) -> Option<PlayerId> {
        current_winner(&self.trick_plays, self.trump_in_play).map(|(seat, _)| seat)
    }

    /// Cards of `suit` in hand, in hand order (strongest first).
    pub fn cards_of(&self, suit: Suit) -> Vec<Card> {
        self.hand.iter().copied().filter(|c| c.suit == suit).collect()
    }

    /// Length of the longest suit holding.
    pub fn longest_suit_len(&self) -> usize {
        Suit::ALL
            .iter()
            .map(|&s| count_suit(&self.hand, s))
            .max()
            .unwrap_or(0)
    }
}
