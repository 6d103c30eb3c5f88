use crate::domain::bidding::stay;
use crate::domain::snapshot::{can_see_hand, snapshot_for, RoomHeader, SeatPublic};
use crate::domain::state::{GameState, MatchRules, Phase, TeamId};
use crate::domain::test_state_helpers::{bidding_state, c, standard_hands};

fn header() -> RoomHeader {
    RoomHeader {
        room_id: "r1".into(),
        room_name: "table".into(),
        host: Some("ann".into()),
        players: ["ann", "bob", "cat", "dan"]
            .iter()
            .enumerate()
            .map(|(i, n)| SeatPublic {
                seat: i as u8,
                name: (*n).to_owned(),
                team: TeamId::of_seat(i as u8),
            })
            .collect(),
    }
}

#[test]
fn bidding_hides_hands_except_dealer_and_first_actor() {
    // dealer 3, first actor 0
    let state = bidding_state(standard_hands(), c("4xH"), 3);
    assert!(can_see_hand(&state, 0));
    assert!(!can_see_hand(&state, 1));
    assert!(!can_see_hand(&state, 2));
    assert!(can_see_hand(&state, 3));

    let hidden = snapshot_for(&header(), &state, 1, "bob");
    assert!(hidden.hand.is_empty());
    assert!(hidden.valid_hand.is_empty());
    assert_eq!(hidden.trump, Some(c("4xH")));
    assert_eq!(hidden.to_act, Some(0));

    let shown = snapshot_for(&header(), &state, 0, "ann");
    assert_eq!(shown.hand.len(), 6);
    assert_eq!(shown.valid_hand, shown.hand);
}

#[test]
fn everyone_sees_hands_once_round_starts() {
    let mut state = bidding_state(standard_hands(), c("4xH"), 3);
    stay(&mut state, 0).unwrap();
    for seat in 0..4 {
        let snap = snapshot_for(&header(), &state, seat, "x");
        assert_eq!(snap.hand.len(), 6);
        assert!(snap.round_start);
        assert!(snap.player_stay);
        assert_eq!(snap.curr_turn, Some(0));
    }
}

#[test]
fn lobby_snapshot_has_no_round_data() {
    let state = GameState::new(MatchRules::default());
    let snap = snapshot_for(&header(), &state, 2, "cat");
    assert_eq!(snap.phase, Phase::Lobby);
    assert!(!snap.game_start);
    assert!(snap.hand.is_empty());
    assert_eq!(snap.dealer, None);
    assert_eq!(snap.curr_turn, None);
    assert_eq!(snap.trump, None);
    assert_eq!(snap.deck, 52);
    assert_eq!(snap.players.len(), 4);
    assert_eq!(snap.host.as_deref(), Some("ann"));
}

#[test]
fn snapshot_serializes_with_card_tokens() {
    let state = bidding_state(standard_hands(), c("4xH"), 3);
    let snap = snapshot_for(&header(), &state, 0, "ann");
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["trump"], "4xH");
    assert_eq!(json["hand"][0], "2xC");
    assert_eq!(json["phase"], "bidding");
    assert_eq!(json["team_1_score"], 0);
    assert_eq!(json["winner"], serde_json::Value::Null);
}
