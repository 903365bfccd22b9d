//! Game events and the bounded notice log.
//!
//! Every action returns the events it produced; the flow also pushes them into
//! an [`EventLog`] that keeps only the most recent few for display.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::scoring::RoundResult;
use crate::domain::state::{seat_name, PlayerId, Team, HUMAN_SEAT};
use crate::domain::{Card, Suit};

pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    HandDealt { hand_no: u32, redeals: u32 },
    BidPlaced { seat: PlayerId, amount: u8 },
    Passed { seat: PlayerId },
    AllPassedRedeal { hand_no: u32 },
    AuctionWon { seat: PlayerId, amount: u8 },
    /// The suit stays concealed; only the chooser is announced.
    TrumpSelected { by: PlayerId },
    TrumpRevealed { suit: Suit },
    CardPlayed { seat: PlayerId, card: Card },
    TrickWon { winner: PlayerId, team: Team },
    RoundScored(RoundResult),
}

impl GameEvent {
    /// Whether this event is shown in the notice log.
    ///
    /// Card plays are visible on the table itself and are not logged as text.
    pub fn is_notice(&self) -> bool {
        !matches!(self, GameEvent::CardPlayed { .. })
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GameEvent::HandDealt { hand_no, .. } => write!(f, "Hand {hand_no} dealt."),
            GameEvent::BidPlaced { seat: HUMAN_SEAT, amount } => write!(f, "You bid {amount}."),
            GameEvent::BidPlaced { seat, amount } => {
                write!(f, "{} bids {amount}.", seat_name(seat))
            }
            GameEvent::Passed { seat: HUMAN_SEAT } => f.write_str("You passed."),
            GameEvent::Passed { seat } => write!(f, "{} passes.", seat_name(seat)),
            GameEvent::AllPassedRedeal { .. } => f.write_str("All passed. Re-dealing."),
            GameEvent::AuctionWon { seat, amount } => {
                write!(f, "{} wins with {amount}!", seat_name(seat))
            }
            GameEvent::TrumpSelected { by } => {
                write!(f, "{} has chosen trump.", seat_name(by))
            }
            GameEvent::TrumpRevealed { suit } => {
                write!(f, "TRUMP REVEALED: {}!", suit.name())
            }
            GameEvent::CardPlayed { seat, card } => {
                write!(f, "{} plays {card}.", seat_name(seat))
            }
            GameEvent::TrickWon { winner, .. } => {
                write!(f, "{} takes trick.", seat_name(winner))
            }
            GameEvent::RoundScored(result) => {
                if result.made {
                    write!(
                        f,
                        "Bidder Team ({}) WON! (+{} pts)",
                        seat_name(result.bidder),
                        result.headline_points()
                    )
                } else {
                    write!(
                        f,
                        "Bidder Team FAILED! (-{} pts)",
                        result.headline_points()
                    )
                }
            }
        }
    }
}

/// Ring of the most recent notices. Pushing past capacity drops the oldest.
#[derive(Debug, Clone)]
pub struct EventLog {
    capacity: usize,
    entries: VecDeque<GameEvent>,
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, event: GameEvent) {
        if !event.is_notice() {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(event);
    }

    pub fn extend<I: IntoIterator<Item = GameEvent>>(&mut self, events: I) {
        for event in events {
            self.push(event);
        }
    }

    pub fn latest(&self) -> Option<&GameEvent> {
        self.entries.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter()
    }

    pub fn notices(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_LOG_CAPACITY)
    }
}
