use tracing::debug;

use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{check_hang_jack, track_play};
use crate::domain::state::{next_seat, require_phase, GameState, Phase, Play, Seat, TeamId};
use crate::domain::{card_beats, hand_has_suit, is_single_suit, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Every hand is empty; the round is ready to be scored.
    pub round_complete: bool,
}

/// Compute the cards of `hand` that may be played onto `lift`.
///
/// Order of the hand is preserved.
pub fn legal_moves(hand: &[Card], lift: &[Play], trump: Option<Suit>) -> Vec<Card> {
    if hand.is_empty() {
        return Vec::new();
    }
    let Some(call) = lift.first().map(|p| p.card.suit) else {
        return hand.to_vec();
    };
    if is_single_suit(hand) {
        return hand.to_vec();
    }

    let holds_call = hand_has_suit(hand, call);
    hand.iter()
        .copied()
        .filter(|c| {
            if c.suit == call {
                return true;
            }
            if Some(c.suit) != trump {
                return !holds_call;
            }
            // Trump may only be played if it tops every trump already down.
            lift.iter()
                .filter(|p| Some(p.card.suit) == trump)
                .all(|p| c.rank >= p.card.rank)
        })
        .collect()
}

/// Winning play of a trick: highest trump, else highest card of the call suit.
pub fn trick_winner(lift: &[Play], trump: Option<Suit>) -> Option<Play> {
    let first = lift.first()?;
    let call = first.card.suit;
    let trump = trump.unwrap_or(call);

    let mut best = *first;
    for play in &lift[1..] {
        if card_beats(play.card, best.card, call, trump) {
            best = *play;
        }
    }
    Some(best)
}

/// Highest trump on the table, if any.
pub fn highest_trump(lift: &[Play], trump: Suit) -> Option<Play> {
    lift.iter()
        .copied()
        .filter(|p| p.card.suit == trump)
        .max_by_key(|p| p.card.rank)
}

/// Play a card into the current trick, enforcing phase, turn, possession and
/// legality. `card` is `None` when the client token could not be decoded.
pub fn play_card(
    state: &mut GameState,
    who: Seat,
    card: Option<Card>,
) -> Result<PlayCardResult, DomainError> {
    require_phase(state, Phase::RoundInPlay)?;

    if state.turn != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("seat {who} played on seat {}'s turn", state.turn),
        ));
    }

    let Some(card) = card else {
        return Err(DomainError::validation(
            ValidationKind::ParseCard,
            "no card given",
        ));
    };

    let hand = &state.hands[who as usize];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("{card} not in hand"),
        ));
    };

    let legal = legal_moves(hand, &state.lift, state.trump_suit());
    if !legal.contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::IllegalPlay,
            format!("{card} may not be played now"),
        ));
    }

    let removed = state.hands[who as usize].remove(pos);
    let play = Play {
        seat: who,
        card: removed,
    };
    state.lift.push(play);
    track_play(state, play);

    state.turn = next_seat(who);

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        round_complete: false,
    };

    if state.lift.len() == PLAYERS {
        check_hang_jack(state);

        let winner = trick_winner(&state.lift, state.trump_suit()).ok_or_else(|| {
            DomainError::invariant("complete trick without a winner")
        })?;
        let team = TeamId::of_seat(winner.seat);
        let cards: Vec<Card> = state.lift.drain(..).map(|p| p.card).collect();
        state.team_mut(team).pile.extend(cards);
        state.turn = winner.seat;

        debug!(winner = winner.seat, card = %winner.card, team = %team, "Trick resolved");
        result.trick_completed = true;
        result.trick_winner = Some(winner.seat);
    }

    result.round_complete = state.all_hands_empty();
    Ok(result)
}
