use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::bidding::{beg, give_one, go_again, stay, GoAgainOutcome};
use crate::domain::state::{Phase, TeamId};
use crate::domain::test_state_helpers::{bidding_state, c, stack_deck, standard_hands};
use crate::domain::GameState;
use crate::errors::domain::ValidationKind;

// Dealer 3, first actor 0, trump 4xH.
fn fresh() -> GameState {
    bidding_state(standard_hands(), c("4xH"), 3)
}

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(99)
}

#[test]
fn only_first_actor_may_beg() {
    let mut state = fresh();
    for seat in [1, 2, 3] {
        let err = beg(&mut state, seat).unwrap_err();
        assert_eq!(err.kind(), Some(ValidationKind::OutOfTurn));
    }
    beg(&mut state, 0).unwrap();
    assert!(state.begged);
    assert!(!state.stayed);
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.to_act(), Some(3));
}

#[test]
fn repeated_beg_or_stay_after_beg_is_rejected() {
    let mut state = fresh();
    beg(&mut state, 0).unwrap();
    let err = beg(&mut state, 0).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::BidAlreadyMade));
    let err = stay(&mut state, 0).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::BidAlreadyMade));
    assert!(state.begged && !state.stayed);
}

#[test]
fn stay_starts_the_round() {
    let mut state = fresh();
    stay(&mut state, 0).unwrap();
    assert!(state.stayed);
    assert!(!state.begged);
    assert!(state.round_started);
    assert_eq!(state.phase, Phase::RoundInPlay);
    assert_eq!(state.turn, 0);

    // Repeated stay is a no-op now that play has begun.
    let err = stay(&mut state, 0).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}

#[test]
fn dealer_answers_require_a_pending_beg() {
    let mut state = fresh();
    let err = give_one(&mut state, 3).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::NoPendingBeg));
    let err = go_again(&mut state, 3, &mut rng()).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::NoPendingBeg));
}

#[test]
fn only_dealer_may_answer() {
    let mut state = fresh();
    beg(&mut state, 0).unwrap();
    for seat in [0, 1, 2] {
        let err = give_one(&mut state, seat).unwrap_err();
        assert_eq!(err.kind(), Some(ValidationKind::NotDealer));
        let err = go_again(&mut state, seat, &mut rng()).unwrap_err();
        assert_eq!(err.kind(), Some(ValidationKind::NotDealer));
    }
}

#[test]
fn give_one_scores_for_the_begging_team() {
    let mut state = fresh();
    beg(&mut state, 0).unwrap();
    let ended = give_one(&mut state, 3).unwrap();
    assert!(!ended);
    assert_eq!(state.score(TeamId::One), 1);
    assert_eq!(state.score(TeamId::Two), 0);
    assert_eq!(state.phase, Phase::RoundInPlay);
    assert_eq!(state.turn, 0);
}

#[test]
fn give_one_can_end_the_match() {
    let mut state = fresh();
    state.team_mut(TeamId::One).score = 5;
    beg(&mut state, 0).unwrap();
    assert!(give_one(&mut state, 3).unwrap());
    assert_eq!(state.phase, Phase::MatchOver);
    assert_eq!(state.winner, Some(TeamId::One));
}

#[test]
fn go_again_stops_when_suit_changes_on_first_pass() {
    let mut state = fresh();
    stack_deck(&mut state, &[(12, c("2xS"))]);
    beg(&mut state, 0).unwrap();

    let out = go_again(&mut state, 3, &mut rng()).unwrap();
    assert_eq!(out, GoAgainOutcome::RoundStarted);
    assert_eq!(state.trump(), Some(c("2xS")));
    assert_eq!(state.turned_up, vec![c("4xH"), c("2xS")]);
    for hand in &state.hands {
        assert_eq!(hand.len(), 9);
    }
    assert_eq!(state.deck.len(), 14);
    assert_eq!(state.phase, Phase::RoundInPlay);
    assert_eq!(state.turn, 0);
    assert!(state.check_conservation().is_ok());
}

#[test]
fn go_again_keeps_dealing_while_suit_repeats() {
    // Standard order: pass one flips KxH (same suit), pass two flips KxS.
    let mut state = fresh();
    beg(&mut state, 0).unwrap();

    let out = go_again(&mut state, 3, &mut rng()).unwrap();
    assert_eq!(out, GoAgainOutcome::RoundStarted);
    assert_eq!(state.turned_up, vec![c("4xH"), c("KxH"), c("KxS")]);
    for hand in &state.hands {
        assert_eq!(hand.len(), 12);
    }
    assert_eq!(state.deck.len(), 1);
    assert!(state.check_conservation().is_ok());
}

#[test]
fn go_again_flips_alone_when_too_few_cards_for_a_pass() {
    let mut state = fresh();
    stack_deck(&mut state, &[(12, c("2xH")), (25, c("3xH")), (26, c("9xS"))]);
    beg(&mut state, 0).unwrap();

    let out = go_again(&mut state, 3, &mut rng()).unwrap();
    assert_eq!(out, GoAgainOutcome::RoundStarted);
    assert_eq!(state.trump(), Some(c("9xS")));
    assert_eq!(state.turned_up.len(), 4);
    assert!(state.deck.is_empty());
    for hand in &state.hands {
        assert_eq!(hand.len(), 12);
    }
    assert!(state.check_conservation().is_ok());
}

#[test]
fn go_again_exhaustion_redeals_with_same_dealer() {
    let mut state = fresh();
    stack_deck(&mut state, &[(12, c("2xH")), (25, c("3xH")), (26, c("5xH"))]);
    beg(&mut state, 0).unwrap();

    let out = go_again(&mut state, 3, &mut rng()).unwrap();
    assert_eq!(out, GoAgainOutcome::Redealt);
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.dealer, 3);
    assert_eq!(state.first_actor, 0);
    assert_eq!(state.round_no, 1);
    assert!(!state.begged && !state.stayed && !state.round_started);
    assert_eq!(state.turned_up.len(), 1);
    for hand in &state.hands {
        assert_eq!(hand.len(), 6);
    }
    assert_eq!(state.deck.len(), 27);
    assert!(state.check_conservation().is_ok());
}

#[test]
fn go_again_flip_awards_kick_points_to_dealer_team() {
    let mut state = fresh();
    stack_deck(&mut state, &[(12, c("JxS"))]);
    beg(&mut state, 0).unwrap();

    go_again(&mut state, 3, &mut rng()).unwrap();
    assert_eq!(state.score(TeamId::Two), 3);
    assert_eq!(state.score(TeamId::One), 0);
}

#[test]
fn go_again_kick_can_end_the_match() {
    let mut state = fresh();
    state.team_mut(TeamId::Two).score = 4;
    stack_deck(&mut state, &[(12, c("6xS"))]);
    beg(&mut state, 0).unwrap();

    let out = go_again(&mut state, 3, &mut rng()).unwrap();
    assert_eq!(out, GoAgainOutcome::MatchEnded);
    assert_eq!(state.phase, Phase::MatchOver);
    assert_eq!(state.winner, Some(TeamId::Two));
}

#[test]
fn bidding_actions_outside_bidding_are_phase_mismatch() {
    let mut state = fresh();
    state.phase = Phase::Lobby;
    assert_eq!(
        beg(&mut state, 0).unwrap_err().kind(),
        Some(ValidationKind::PhaseMismatch)
    );
    state.phase = Phase::MatchOver;
    assert_eq!(
        give_one(&mut state, 3).unwrap_err().kind(),
        Some(ValidationKind::PhaseMismatch)
    );
}
