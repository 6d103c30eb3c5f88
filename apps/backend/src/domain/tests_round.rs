use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::round::{deal_round, finish_round, start_match};
use crate::domain::rules::kick_points;
use crate::domain::state::{next_seat, GameState, MatchRules, Phase, TeamId};
use crate::domain::test_state_helpers::{c, cards, in_play_state};
use crate::errors::domain::ValidationKind;

#[test]
fn start_match_deals_and_flips() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let mut state = GameState::new(MatchRules::default());
    start_match(&mut state, &mut rng).unwrap();

    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.round_no, 1);
    assert_eq!(state.first_actor, next_seat(state.dealer));
    assert_eq!(state.turn, state.first_actor);
    for hand in &state.hands {
        assert_eq!(hand.len(), 6);
    }
    assert_eq!(state.turned_up.len(), 1);
    assert_eq!(state.deck.len(), 52 - 24 - 1);
    assert!(state.check_conservation().is_ok());

    let trump = state.trump().unwrap();
    let dealer_team = TeamId::of_seat(state.dealer);
    assert_eq!(state.score(dealer_team), kick_points(trump.rank));
    assert_eq!(state.score(dealer_team.other()), 0);
}

#[test]
fn start_match_twice_is_phase_mismatch() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let mut state = GameState::new(MatchRules::default());
    start_match(&mut state, &mut rng).unwrap();
    let err = start_match(&mut state, &mut rng).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}

#[test]
fn same_seed_same_deal() {
    let mut a = GameState::new(MatchRules::default());
    let mut b = GameState::new(MatchRules::default());
    start_match(&mut a, &mut ChaCha20Rng::seed_from_u64(11)).unwrap();
    start_match(&mut b, &mut ChaCha20Rng::seed_from_u64(11)).unwrap();
    assert_eq!(a.dealer, b.dealer);
    assert_eq!(a.hands, b.hands);
    assert_eq!(a.turned_up, b.turned_up);
}

#[test]
fn configured_hand_size_is_dealt() {
    let rules = MatchRules {
        win_threshold: 21,
        hand_size: 9,
    };
    let mut state = GameState::new(rules);
    start_match(&mut state, &mut ChaCha20Rng::seed_from_u64(3)).unwrap();
    for hand in &state.hands {
        assert_eq!(hand.len(), 9);
    }
    assert_eq!(state.deck.len(), 52 - 36 - 1);
}

#[test]
fn finish_round_rotates_dealer_and_resets() {
    let hands = [
        cards(&["AxD"]),
        cards(&["2xC"]),
        cards(&["KxD"]),
        cards(&["5xD"]),
    ];
    let mut state = in_play_state(hands, c("4xH"), 3);
    state.hands = Default::default();
    state.team_mut(TeamId::One).pile = cards(&["AxD", "2xC", "KxD", "5xD"]);
    state.trackers.high = None;

    let mut rng = ChaCha20Rng::seed_from_u64(8);
    finish_round(&mut state, &mut rng).unwrap();

    // Team one took the game point (7 vs 0); no trump was played.
    assert!(state.score(TeamId::One) >= 1);
    assert_eq!(state.dealer, 0);
    assert_eq!(state.first_actor, 1);
    assert_eq!(state.round_no, 2);
    assert_eq!(state.phase, Phase::Bidding);
    assert!(!state.round_started && !state.begged && !state.stayed);
    assert!(state.teams.iter().all(|t| t.pile.is_empty()));
    assert_eq!(state.trackers, Default::default());
    assert!(state.check_conservation().is_ok());
}

#[test]
fn finish_round_with_cards_in_hand_is_an_invariant_error() {
    let hands = [cards(&["AxD"]), cards(&["2xC"]), cards(&["KxD"]), cards(&["5xD"])];
    let mut state = in_play_state(hands, c("4xH"), 3);
    let err = finish_round(&mut state, &mut ChaCha20Rng::seed_from_u64(1)).unwrap_err();
    assert!(err.kind().is_none());
}

#[test]
fn deal_round_kick_can_end_the_match() {
    // Find a seed whose first flip is a jack; a team at 5 then wins on the deal.
    for seed in 0..500u64 {
        let mut state = GameState::new(MatchRules::default());
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let dealer = 2;
        state.team_mut(TeamId::of_seat(dealer)).score = 5;
        deal_round(&mut state, dealer, &mut rng).unwrap();
        let trump = state.trump().unwrap();
        if kick_points(trump.rank) > 0 {
            assert_eq!(state.phase, Phase::MatchOver);
            assert_eq!(state.winner, Some(TeamId::of_seat(dealer)));
            return;
        }
        assert_eq!(state.phase, Phase::Bidding);
    }
    panic!("no kicking flip in 500 seeds");
}
