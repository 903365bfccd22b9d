use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use super::{ActionOutcome, GameFlow};
use crate::domain::bidding::{place_bid, AuctionOutcome, Bid};
use crate::domain::dealing::{build_deck, deal_first, deal_second, shuffle};
use crate::domain::events::GameEvent;
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{
    require_bid_winner, require_phase, Phase, PlayerId, RoundState, Team, HUMAN_SEAT,
};
use crate::domain::tricks::play_card;
use crate::domain::trump::set_trump;
use crate::domain::{Card, Suit};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlow {
    /// Start the first hand, or throw in the hand in progress and re-deal it.
    ///
    /// A scored hand is left with [`GameFlow::next_hand`].
    pub fn start_hand(&mut self) -> Result<ActionOutcome, AppError> {
        match self.state.phase {
            Phase::Lobby => {
                self.state.hand_no = 1;
                self.state.redeals = 0;
                self.deal_attempt = 0;
                info!(hand_no = 1, "Starting first hand");
            }
            Phase::RoundEnd => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    "Hand already scored; start the next hand instead",
                )
                .into());
            }
            phase => {
                info!(hand_no = self.state.hand_no, ?phase, "Resetting hand in progress");
            }
        }

        let mut events = Vec::new();
        self.deal_first_round(&mut events)?;
        self.settle(events)
    }

    /// Leave a scored hand and deal the next one.
    pub fn next_hand(&mut self) -> Result<ActionOutcome, AppError> {
        require_phase(&self.state, Phase::RoundEnd)?;
        self.state.hand_no += 1;
        self.state.redeals = 0;
        self.state.last_result = None;
        self.deal_attempt = 0;

        let mut events = Vec::new();
        self.deal_first_round(&mut events)?;
        self.settle(events)
    }

    /// Dealing1: fresh deck, shuffle, five cards each, auction opens at seat 0.
    pub(super) fn deal_first_round(&mut self, events: &mut Vec<GameEvent>) -> Result<(), AppError> {
        self.state.phase = Phase::Dealing1;
        let seed = derive_dealing_seed(self.game_seed, self.state.hand_no, self.deal_attempt);
        self.deal_attempt += 1;

        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let deck = shuffle(build_deck(), &mut rng);
        let hands = deal_first(&deck)?;

        self.state.round = RoundState::empty();
        self.state.round.deck = deck;
        self.state.hands = hands;
        self.state.phase = Phase::Bidding;
        self.state.turn = Some(HUMAN_SEAT);
        self.state.leader = None;
        self.state.trick_no = None;

        info!(
            hand_no = self.state.hand_no,
            redeals = self.state.redeals,
            "Hand dealt"
        );
        events.push(GameEvent::HandDealt {
            hand_no: self.state.hand_no,
            redeals: self.state.redeals,
        });
        Ok(())
    }

    /// Dealing2: remaining 32 cards, then the bid winner leads trick 1.
    fn deal_second_round(&mut self) -> Result<(), AppError> {
        require_phase(&self.state, Phase::Dealing2)?;
        deal_second(&self.state.round.deck, &mut self.state.hands)?;
        let winner = require_bid_winner(&self.state, "deal_second_round")?;

        self.state.phase = Phase::Playing;
        self.state.turn = Some(winner.player);
        self.state.leader = Some(winner.player);
        self.state.trick_no = Some(1);
        debug!(hand_no = self.state.hand_no, leader = winner.player, "Second deal complete");
        Ok(())
    }

    pub(super) fn apply_bid(
        &mut self,
        seat: PlayerId,
        amount: u8,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), AppError> {
        let result = place_bid(&mut self.state, seat, Bid(amount))?;
        if result.raised {
            info!(seat, amount, "Bid placed");
            events.push(GameEvent::BidPlaced { seat, amount });
        } else {
            debug!(seat, amount, "Pass");
            events.push(GameEvent::Passed { seat });
        }

        match result.outcome {
            AuctionOutcome::Continue { .. } => {}
            AuctionOutcome::Won(winner) => {
                info!(
                    hand_no = self.state.hand_no,
                    seat = winner.player,
                    amount = winner.amount,
                    "Auction won"
                );
                events.push(GameEvent::AuctionWon {
                    seat: winner.player,
                    amount: winner.amount,
                });
            }
            AuctionOutcome::AllPassed => {
                info!(hand_no = self.state.hand_no, "All passed; re-dealing");
                events.push(GameEvent::AllPassedRedeal {
                    hand_no: self.state.hand_no,
                });
                self.state.redeals += 1;
                self.deal_first_round(events)?;
            }
        }
        Ok(())
    }

    pub(super) fn apply_trump(
        &mut self,
        seat: PlayerId,
        suit: Suit,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), AppError> {
        set_trump(&mut self.state, seat, suit)?;
        info!(seat, "Trump selected");
        debug!(seat, suit = %suit, "Concealed trump suit");
        events.push(GameEvent::TrumpSelected { by: seat });
        self.deal_second_round()
    }

    pub(super) fn apply_play(
        &mut self,
        seat: PlayerId,
        card: Card,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), AppError> {
        let result = play_card(&mut self.state, seat, card)?;
        debug!(seat, card = %card.id(), "Card played");
        events.push(GameEvent::CardPlayed { seat, card });

        if let Some(suit) = result.trump_revealed {
            info!(seat, suit = %suit, "Trump revealed");
            events.push(GameEvent::TrumpRevealed { suit });
        }
        if let Some(winner) = result.trick_winner {
            debug!(winner, trick_no = result.trick_no_after - 1, "Trick won");
            events.push(GameEvent::TrickWon {
                winner,
                team: Team::of(winner),
            });
        }
        if let Some(round) = result.round_result {
            info!(
                hand_no = round.hand_no,
                bidder = round.bidder,
                contract = round.contract,
                tricks_won = round.tricks_won,
                made = round.made,
                "Round scored"
            );
            events.push(GameEvent::RoundScored(round));
        }
        Ok(())
    }
}
