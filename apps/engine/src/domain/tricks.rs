use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{apply_round_scoring, RoundResult};
use crate::domain::state::{
    next_player, require_actor, require_phase, require_trick_no, CompletedTrick, GameState,
    Phase, PlayerId, RoundState, Team,
};
use crate::domain::trump::reveal_on_play;
use crate::domain::{card_beats, hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Set when this play exposed the trump suit.
    pub trump_revealed: Option<Suit>,
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
    /// Trick number after this play (may have incremented if trick completed).
    pub trick_no_after: u8,
    /// Scoring outcome when this play finished the hand.
    pub round_result: Option<RoundResult>,
}

/// Whether `card` may be played from `hand` onto the current trick.
///
/// Leading is always legal. Following, the lead suit is mandatory while the
/// hand holds any; otherwise anything goes, trump included but not required.
pub fn is_legal_play(hand: &[Card], trick_plays: &[(PlayerId, Card)], card: Card) -> bool {
    if !hand.contains(&card) {
        return false;
    }
    match trick_plays.first() {
        None => true,
        Some(&(_, lead)) => card.suit == lead.suit || !hand_has_suit(hand, lead.suit),
    }
}

/// Cards `who` may play right now.
///
/// Empty outside the trick phase or when it is not `who`'s turn.
pub fn legal_moves(state: &GameState, who: PlayerId) -> Vec<Card> {
    if state.phase != Phase::Playing || state.turn != Some(who) {
        return Vec::new();
    }
    let Some(hand) = state.hands.get(who as usize) else {
        return Vec::new();
    };
    hand.iter()
        .copied()
        .filter(|&c| is_legal_play(hand, &state.round.trick_plays, c))
        .collect()
}

/// The play currently holding the trick, if any card has been played.
pub fn current_winner(plays: &[(PlayerId, Card)], trump: Option<Suit>) -> Option<(PlayerId, Card)> {
    let (&first, rest) = plays.split_first()?;
    Some(rest.iter().fold(first, |best, &play| {
        if card_beats(play.1, best.1, trump) {
            play
        } else {
            best
        }
    }))
}

/// Resolve the winner of the full trick in the buffer.
pub fn resolve_current_trick(round: &RoundState) -> Result<PlayerId, DomainError> {
    if round.trick_plays.len() != PLAYERS {
        return Err(DomainError::invariant(format!(
            "trick evaluated with {} plays",
            round.trick_plays.len()
        )));
    }
    current_winner(&round.trick_plays, round.trump.suit)
        .map(|(seat, _)| seat)
        .ok_or_else(|| DomainError::invariant("trick has no plays"))
}

/// Play a card into the current trick, enforcing turn, suit-following, and phase.
pub fn play_card(
    state: &mut GameState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    require_phase(state, Phase::Playing)?;
    let trick_no_before = require_trick_no(state, "play_card")?;
    require_actor(state, who, "play_card")?;

    let hand = &state.hands[who as usize];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {} not in hand", card.id()),
        ));
    };
    if !is_legal_play(hand, &state.round.trick_plays, card) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            "Must follow suit",
        ));
    }

    if state.round.trick_plays.is_empty() {
        state.leader = Some(who);
    }

    let removed = state.hands[who as usize].remove(pos);
    state.round.trick_plays.push((who, removed));
    let trump_revealed = reveal_on_play(&mut state.round.trump, removed)
        .then_some(removed.suit);

    let mut result = PlayCardResult {
        trump_revealed,
        trick_completed: false,
        trick_winner: None,
        trick_no_after: trick_no_before,
        round_result: None,
    };

    if state.round.trick_plays.len() < PLAYERS {
        state.turn = Some(next_player(who));
        return Ok(result);
    }

    let winner = resolve_current_trick(&state.round)?;
    state.round.team_tricks[Team::of(winner).index()] += 1;
    let plays = std::mem::take(&mut state.round.trick_plays);
    state.round.cards_played += plays.len() as u8;
    state.round.last_trick = Some(CompletedTrick { plays, winner });
    state.leader = Some(winner);
    state.turn = Some(winner);

    result.trick_completed = true;
    result.trick_winner = Some(winner);
    result.trick_no_after = trick_no_before.saturating_add(1);

    if state.hands.iter().all(Vec::is_empty) {
        result.round_result = Some(apply_round_scoring(state)?);
    } else {
        state.trick_no = Some(result.trick_no_after);
    }

    Ok(result)
}
