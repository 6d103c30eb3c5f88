//! Round lifecycle: match start, dealing with the trump flip, round start
//! and the score-and-advance step after the last trick.

use rand::Rng;
use tracing::info;

use crate::domain::dealing::{deal_in_turn_order, Deck};
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{apply_round_scoring, award_kick};
use crate::domain::state::{next_seat, require_phase, round_start_seat, GameState, Phase, RoundTrackers, Seat};
use crate::errors::domain::DomainError;

/// Pick a random dealer and deal the first round.
pub fn start_match<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Result<(), DomainError> {
    require_phase(state, Phase::Lobby)?;
    let dealer = rng.random_range(0..PLAYERS as Seat);
    info!(dealer, "Match started");
    deal_round(state, dealer, rng)
}

/// Flip the next card as trump and credit its kick points.
///
/// Returns `Ok(None)` when the deck is empty, otherwise whether the kick
/// ended the match.
pub fn flip_trump(state: &mut GameState) -> Option<bool> {
    let card = state.deck.flip()?;
    state.turned_up.push(card);
    info!(trump = %card, dealer = state.dealer, "Trump flipped");
    Some(award_kick(state, card))
}

/// Collect every card, shuffle a fresh deck, deal a new round for `dealer`
/// and flip trump. Leaves the room in `Bidding` unless the kick ended the
/// match.
pub fn deal_round<R: Rng + ?Sized>(
    state: &mut GameState,
    dealer: Seat,
    rng: &mut R,
) -> Result<(), DomainError> {
    let mut deck = Deck::new_full();
    deck.shuffle(rng)?;

    reset_round(state);
    state.deck = deck;
    state.dealer = dealer;
    state.first_actor = round_start_seat(dealer);
    state.turn = state.first_actor;
    state.round_no += 1;
    state.phase = Phase::Bidding;

    deal_in_turn_order(
        &mut state.deck,
        &mut state.hands,
        state.first_actor,
        state.rules.hand_size as usize,
    );
    info!(
        round = state.round_no,
        dealer = state.dealer,
        first_actor = state.first_actor,
        "Round dealt"
    );

    if flip_trump(state).is_none() {
        return Err(DomainError::invariant("deck exhausted before trump flip"));
    }
    Ok(())
}

/// Deal the same round again from a fresh deck: same dealer and first actor.
/// Points already awarded stand.
pub fn redeal<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Result<(), DomainError> {
    info!(dealer = state.dealer, "Deck exhausted without a new trump suit; redealing");
    let round_no = state.round_no;
    deal_round(state, state.dealer, rng)?;
    state.round_no = round_no;
    Ok(())
}

/// Bidding is resolved: play begins with the first actor.
pub fn start_play(state: &mut GameState) {
    state.round_started = true;
    state.phase = Phase::RoundInPlay;
    state.turn = state.first_actor;
    info!(first_actor = state.first_actor, "Round started");
}

/// Score a finished round and, unless the match ended, deal the next one
/// with the dealer rotated one seat.
pub fn finish_round<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Result<(), DomainError> {
    require_phase(state, Phase::RoundInPlay)?;
    if !state.all_hands_empty() {
        return Err(DomainError::invariant("round finished with cards in hand"));
    }
    if apply_round_scoring(state) {
        return Ok(());
    }
    deal_round(state, next_seat(state.dealer), rng)
}

/// Clear everything that lives for a single round. Scores stay.
fn reset_round(state: &mut GameState) {
    for hand in state.hands.iter_mut() {
        hand.clear();
    }
    for team in state.teams.iter_mut() {
        team.pile.clear();
    }
    state.lift.clear();
    state.turned_up.clear();
    state.begged = false;
    state.stayed = false;
    state.round_started = false;
    state.trackers = RoundTrackers::default();
}
