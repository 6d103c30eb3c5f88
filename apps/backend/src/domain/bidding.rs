//! Beg / stay / give-one / go-again.

use rand::Rng;
use tracing::info;

use crate::domain::dealing::deal_in_turn_order;
use crate::domain::round::{flip_trump, redeal, start_play};
use crate::domain::rules::{go_again_pass_cards, GIVE_ONE_POINTS, GO_AGAIN_CARDS};
use crate::domain::scoring::{award, PointKind};
use crate::domain::state::{require_phase, GameState, Phase, Seat, TeamId};
use crate::errors::domain::{DomainError, ValidationKind};

/// How a go-again resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoAgainOutcome {
    /// A new trump suit came up; play begins.
    RoundStarted,
    /// The deck ran out on the starting suit; the round was dealt again.
    Redealt,
    /// Kick points from a flip ended the match.
    MatchEnded,
}

fn require_first_actor(state: &GameState, who: Seat) -> Result<(), DomainError> {
    if who != state.first_actor {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("seat {who} is not the first actor"),
        ));
    }
    if state.begged || state.stayed {
        return Err(DomainError::validation(
            ValidationKind::BidAlreadyMade,
            "beg or stay already made this round",
        ));
    }
    Ok(())
}

fn require_dealer_answer(state: &GameState, who: Seat) -> Result<(), DomainError> {
    if who != state.dealer {
        return Err(DomainError::validation(
            ValidationKind::NotDealer,
            format!("seat {who} is not the dealer"),
        ));
    }
    if !state.begged {
        return Err(DomainError::validation(
            ValidationKind::NoPendingBeg,
            "no beg to answer",
        ));
    }
    Ok(())
}

pub fn beg(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    require_phase(state, Phase::Bidding)?;
    require_first_actor(state, who)?;
    state.begged = true;
    info!(seat = who, "Player begged");
    Ok(())
}

pub fn stay(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    require_phase(state, Phase::Bidding)?;
    require_first_actor(state, who)?;
    state.stayed = true;
    info!(seat = who, "Player stayed");
    start_play(state);
    Ok(())
}

/// Dealer concedes a point to the begging team. Returns `true` if that point
/// ended the match.
pub fn give_one(state: &mut GameState, who: Seat) -> Result<bool, DomainError> {
    require_phase(state, Phase::Bidding)?;
    require_dealer_answer(state, who)?;
    info!(seat = who, "Dealer gave one");
    start_play(state);
    let team = TeamId::of_seat(state.first_actor);
    Ok(award(state, team, PointKind::GiveOne, GIVE_ONE_POINTS))
}

/// Dealer refuses the beg: deal three more cards each and flip a new trump
/// until the suit changes.
pub fn go_again<R: Rng + ?Sized>(
    state: &mut GameState,
    who: Seat,
    rng: &mut R,
) -> Result<GoAgainOutcome, DomainError> {
    require_phase(state, Phase::Bidding)?;
    require_dealer_answer(state, who)?;
    info!(seat = who, "Dealer went again");

    let Some(start_suit) = state.trump_suit() else {
        return Err(DomainError::invariant("bidding without a trump card"));
    };

    while state.trump_suit() == Some(start_suit) && state.deck.len() >= go_again_pass_cards() {
        deal_in_turn_order(&mut state.deck, &mut state.hands, state.first_actor, GO_AGAIN_CARDS);
        if flip_trump(state) == Some(true) {
            return Ok(GoAgainOutcome::MatchEnded);
        }
    }

    while state.trump_suit() == Some(start_suit) && !state.deck.is_empty() {
        if flip_trump(state) == Some(true) {
            return Ok(GoAgainOutcome::MatchEnded);
        }
    }

    if state.trump_suit() == Some(start_suit) {
        redeal(state, rng)?;
        if state.winner.is_some() {
            return Ok(GoAgainOutcome::MatchEnded);
        }
        return Ok(GoAgainOutcome::Redealt);
    }

    start_play(state);
    Ok(GoAgainOutcome::RoundStarted)
}
