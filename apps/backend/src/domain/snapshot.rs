//! Per-player view of a room, pushed after every mutation.

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, Phase, Play, Seat, TeamId};
use crate::domain::tricks::legal_moves;
use crate::domain::Card;

/// Public info about a single occupied seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub name: String,
    pub team: TeamId,
}

/// Room-level facts shared by every viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomHeader {
    pub room_id: String,
    pub room_name: String,
    pub host: Option<String>,
    pub players: Vec<SeatPublic>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub room_id: String,
    pub room_name: String,
    pub host: Option<String>,
    /// Viewer's display name and seat.
    pub name: String,
    pub position: Seat,
    pub phase: Phase,
    pub hand: Vec<Card>,
    pub valid_hand: Vec<Card>,
    /// Cards left undealt.
    pub deck: usize,
    pub curr_turn: Option<Seat>,
    pub dealer: Option<Seat>,
    pub first_actor: Option<Seat>,
    pub to_act: Option<Seat>,
    pub players: Vec<SeatPublic>,
    pub team_1_score: u16,
    pub team_2_score: u16,
    pub trump: Option<Card>,
    pub call_card: Option<Card>,
    pub lift: Vec<Play>,
    pub player_beg: bool,
    pub player_stay: bool,
    pub round_start: bool,
    pub game_start: bool,
    pub winner: Option<TeamId>,
}

/// A seat may see its own cards once the round has started, or during
/// bidding when it is the dealer or the first actor.
pub fn can_see_hand(state: &GameState, seat: Seat) -> bool {
    if !state.game_started() {
        return false;
    }
    state.round_started || seat == state.dealer || seat == state.first_actor
}

/// Build the snapshot for `viewer`, recomputing their legal hand.
pub fn snapshot_for(header: &RoomHeader, state: &GameState, viewer: Seat, name: &str) -> Snapshot {
    let started = state.game_started();
    let (hand, valid_hand) = if can_see_hand(state, viewer) {
        let hand = state.hand(viewer).to_vec();
        let valid = legal_moves(&hand, &state.lift, state.trump_suit());
        (hand, valid)
    } else {
        (Vec::new(), Vec::new())
    };

    let in_round = matches!(state.phase, Phase::Bidding | Phase::RoundInPlay);

    Snapshot {
        room_id: header.room_id.clone(),
        room_name: header.room_name.clone(),
        host: header.host.clone(),
        name: name.to_owned(),
        position: viewer,
        phase: state.phase,
        hand,
        valid_hand,
        deck: state.deck.len(),
        curr_turn: in_round.then_some(state.turn),
        dealer: started.then_some(state.dealer),
        first_actor: started.then_some(state.first_actor),
        to_act: state.to_act(),
        players: header.players.clone(),
        team_1_score: state.score(TeamId::One),
        team_2_score: state.score(TeamId::Two),
        trump: state.trump(),
        call_card: state.call_card(),
        lift: state.lift.clone(),
        player_beg: state.begged,
        player_stay: state.stayed,
        round_start: state.round_started,
        game_start: started,
        winner: state.winner,
    }
}
