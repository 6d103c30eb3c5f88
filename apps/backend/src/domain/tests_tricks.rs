use crate::domain::state::{Phase, Play, TeamId};
use crate::domain::test_state_helpers::{c, cards, in_play_state};
use crate::domain::tricks::{legal_moves, play_card, trick_winner};
use crate::domain::Suit;
use crate::errors::domain::ValidationKind;

fn lift(plays: &[(u8, &str)]) -> Vec<Play> {
    plays
        .iter()
        .map(|&(seat, tok)| Play { seat, card: c(tok) })
        .collect()
}

#[test]
fn trump_call_with_ten_down() {
    let hand = cards(&["10xH", "JxH", "2xC"]);
    let table = lift(&[(0, "10xH")]);
    let legal = legal_moves(&hand, &table, Some(Suit::Hearts));
    assert_eq!(legal, cards(&["10xH", "JxH"]));
    assert!(!legal.contains(&c("2xC")));
}

#[test]
fn trump_at_or_above_table_trump_is_legal() {
    let hand = cards(&["10xH", "JxH", "8xH", "2xC"]);
    let table = lift(&[(0, "KxD"), (1, "9xH")]);
    let legal = legal_moves(&hand, &table, Some(Suit::Hearts));
    assert_eq!(legal, cards(&["10xH", "JxH", "2xC"]));
}

#[test]
fn empty_lift_allows_whole_hand() {
    let hand = cards(&["2xC", "AxS", "9xD"]);
    assert_eq!(legal_moves(&hand, &[], Some(Suit::Hearts)), hand);
}

#[test]
fn empty_hand_has_no_moves() {
    assert!(legal_moves(&[], &lift(&[(0, "2xC")]), Some(Suit::Hearts)).is_empty());
}

#[test]
fn single_suit_hand_is_always_legal() {
    let hand = cards(&["2xH", "3xH"]);
    let table = lift(&[(0, "KxD"), (1, "QxH")]);
    assert_eq!(legal_moves(&hand, &table, Some(Suit::Hearts)), hand);
}

#[test]
fn must_follow_call_suit_when_holding_it() {
    let hand = cards(&["3xH", "5xD", "9xC"]);
    let table = lift(&[(0, "KxD"), (1, "QxH")]);
    // 3xH is trump but lower than QxH; 9xC is off-suit while holding a diamond.
    assert_eq!(legal_moves(&hand, &table, Some(Suit::Hearts)), cards(&["5xD"]));
}

#[test]
fn overtrump_allowed_while_holding_call_suit() {
    let hand = cards(&["KxH", "5xD", "9xC"]);
    let table = lift(&[(0, "KxD"), (1, "QxH")]);
    assert_eq!(
        legal_moves(&hand, &table, Some(Suit::Hearts)),
        cards(&["KxH", "5xD"])
    );
}

#[test]
fn void_in_call_suit_cannot_undertrump() {
    let hand = cards(&["3xH", "9xC"]);
    let table = lift(&[(0, "KxD"), (1, "QxH")]);
    assert_eq!(legal_moves(&hand, &table, Some(Suit::Hearts)), cards(&["9xC"]));
}

#[test]
fn trump_led_requires_trump_when_held() {
    let hand = cards(&["2xH", "9xC"]);
    let table = lift(&[(0, "KxH")]);
    assert_eq!(legal_moves(&hand, &table, Some(Suit::Hearts)), cards(&["2xH"]));
}

#[test]
fn highest_trump_wins_trick() {
    let table = lift(&[(0, "AxD"), (1, "2xH"), (2, "KxD"), (3, "5xH")]);
    let winner = trick_winner(&table, Some(Suit::Hearts)).unwrap();
    assert_eq!(winner.seat, 3);
}

#[test]
fn highest_call_card_wins_without_trump() {
    let table = lift(&[(2, "9xD"), (3, "AxC"), (0, "KxD"), (1, "10xD")]);
    let winner = trick_winner(&table, Some(Suit::Hearts)).unwrap();
    assert_eq!(winner.seat, 0);
    assert_eq!(winner.card, c("KxD"));
}

#[test]
fn empty_trick_has_no_winner() {
    assert!(trick_winner(&[], Some(Suit::Hearts)).is_none());
}

fn one_trick_hands() -> [Vec<crate::domain::Card>; 4] {
    [
        cards(&["AxD"]),
        cards(&["2xH"]),
        cards(&["KxD"]),
        cards(&["5xD"]),
    ]
}

#[test]
fn play_rejects_wrong_turn_missing_card_and_bad_token() {
    // dealer 3 → first actor 0
    let mut state = in_play_state(one_trick_hands(), c("4xH"), 3);

    let err = play_card(&mut state, 1, Some(c("2xH"))).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::OutOfTurn));

    let err = play_card(&mut state, 0, None).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::ParseCard));

    let err = play_card(&mut state, 0, Some(c("KxD"))).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::CardNotInHand));

    assert!(state.lift.is_empty());
    assert_eq!(state.hands[0].len(), 1);
}

#[test]
fn play_rejects_illegal_card() {
    let hands = [
        cards(&["AxD"]),
        cards(&["9xC", "3xD"]),
        cards(&["KxD"]),
        cards(&["5xD"]),
    ];
    let mut state = in_play_state(hands, c("4xH"), 3);
    play_card(&mut state, 0, Some(c("AxD"))).unwrap();
    let err = play_card(&mut state, 1, Some(c("9xC"))).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::IllegalPlay));
}

#[test]
fn play_outside_round_is_phase_mismatch() {
    let mut state = in_play_state(one_trick_hands(), c("4xH"), 3);
    state.phase = Phase::Bidding;
    let err = play_card(&mut state, 0, Some(c("AxD"))).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}

#[test]
fn completed_trick_goes_to_winning_team_and_winner_leads() {
    let mut state = in_play_state(one_trick_hands(), c("4xH"), 3);

    let r = play_card(&mut state, 0, Some(c("AxD"))).unwrap();
    assert!(!r.trick_completed);
    assert_eq!(state.turn, 1);
    assert_eq!(state.call_card(), Some(c("AxD")));

    play_card(&mut state, 1, Some(c("2xH"))).unwrap();
    play_card(&mut state, 2, Some(c("KxD"))).unwrap();
    let r = play_card(&mut state, 3, Some(c("5xD"))).unwrap();

    assert!(r.trick_completed);
    assert_eq!(r.trick_winner, Some(1));
    assert!(r.round_complete);
    assert_eq!(state.turn, 1);
    assert!(state.lift.is_empty());
    assert_eq!(state.team(TeamId::Two).pile.len(), 4);
    assert!(state.team(TeamId::One).pile.is_empty());
    assert!(state.check_conservation().is_ok());
}
