//! Point awards: kick points, per-play trackers and round-end scoring.

use serde::Serialize;
use tracing::info;

use crate::domain::rules::{
    kick_points, GAME_POINTS, HANG_JACK_POINTS, HIGH_POINTS, JACK_POINTS, LOW_POINTS, PLAYERS,
};
use crate::domain::state::{round_start_seat, GameState, Phase, Play, TeamId};
use crate::domain::tricks::highest_trump;
use crate::domain::{Card, Rank};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Kick,
    GiveOne,
    High,
    Low,
    Jack,
    HangJack,
    Game,
}

/// Add `points` to `team` and run the win check.
///
/// Returns `true` when the award ended the match.
pub fn award(state: &mut GameState, team: TeamId, kind: PointKind, points: u16) -> bool {
    if points > 0 {
        let t = state.team_mut(team);
        t.score = t.score.saturating_add(points);
        info!(team = %team, kind = ?kind, points, score = t.score, "Points awarded");
    }
    check_winner(state)
}

/// Declare a winner once a team reaches the threshold.
pub fn check_winner(state: &mut GameState) -> bool {
    if state.winner.is_some() {
        return true;
    }
    let threshold = state.rules.win_threshold;
    for team in TeamId::BOTH {
        if state.score(team) >= threshold {
            state.winner = Some(team);
            state.phase = Phase::MatchOver;
            info!(winner = %team, team_1 = state.score(TeamId::One), team_2 = state.score(TeamId::Two), "Match over");
            return true;
        }
    }
    false
}

/// Kick points for a freshly flipped trump card, credited to the dealer's team.
pub fn award_kick(state: &mut GameState, flipped: Card) -> bool {
    let team = TeamId::of_seat(state.dealer);
    award(state, team, PointKind::Kick, kick_points(flipped.rank))
}

/// Update the high/low/jack trackers for a card just played.
pub fn track_play(state: &mut GameState, play: Play) {
    let Some(trump) = state.trump_suit() else {
        return;
    };
    if play.card.suit != trump {
        return;
    }
    let trackers = &mut state.trackers;

    match trackers.high {
        Some(high) if play.card.rank < high.card.rank => {}
        _ => trackers.high = Some(play),
    }
    match trackers.low {
        Some(low) if play.card.rank > low.card.rank => {}
        _ => trackers.low = Some(play),
    }
    if play.card.rank == Rank::Jack && !trackers.jack_played {
        trackers.jack_played = true;
        trackers.jack_claim = Some(TeamId::of_seat(play.seat));
    }
}

/// On a full trick holding the trump jack: if another team's higher trump
/// took it, that team captures the hang-jack and the jack point is voided.
pub fn check_hang_jack(state: &mut GameState) {
    if state.lift.len() < PLAYERS {
        return;
    }
    let Some(trump) = state.trump_suit() else {
        return;
    };
    let Some(jack) = state.lift.iter().find(|p| p.card.is_jack_of(trump)).copied() else {
        return;
    };
    let Some(top) = highest_trump(&state.lift, trump) else {
        return;
    };
    if top.card == jack.card {
        return;
    }
    let jack_team = TeamId::of_seat(jack.seat);
    let top_team = TeamId::of_seat(top.seat);
    if jack_team == top_team {
        return;
    }
    info!(team = %top_team, by = %top.card, "Jack hanged");
    state.trackers.hang_jack_claim = Some(top_team);
    state.trackers.jack_claim = None;
}

/// Sum of game-point values in a pile.
pub fn pile_game_points(pile: &[Card]) -> u32 {
    pile.iter().map(|c| c.rank.game_points() as u32).sum()
}

/// Team with the strictly higher pile total; a tie goes to the team of the
/// seat after the dealer.
pub fn game_point_winner(state: &GameState) -> TeamId {
    let one = pile_game_points(&state.team(TeamId::One).pile);
    let two = pile_game_points(&state.team(TeamId::Two).pile);
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => TeamId::One,
        std::cmp::Ordering::Less => TeamId::Two,
        std::cmp::Ordering::Equal => TeamId::of_seat(round_start_seat(state.dealer)),
    }
}

/// Round-end awards in order: high, low, hang-jack or jack, game.
///
/// Each award is followed by a win check; the first one that ends the match
/// stops the pipeline. Returns `true` when the match is over.
pub fn apply_round_scoring(state: &mut GameState) -> bool {
    let trackers = state.trackers;

    if let Some(high) = trackers.high {
        if award(state, TeamId::of_seat(high.seat), PointKind::High, HIGH_POINTS) {
            return true;
        }
    }
    if let Some(low) = trackers.low {
        if award(state, TeamId::of_seat(low.seat), PointKind::Low, LOW_POINTS) {
            return true;
        }
    }
    if let Some(team) = trackers.hang_jack_claim {
        if award(state, team, PointKind::HangJack, HANG_JACK_POINTS) {
            return true;
        }
    } else if let Some(team) = trackers.jack_claim {
        if award(state, team, PointKind::Jack, JACK_POINTS) {
            return true;
        }
    }
    let team = game_point_winner(state);
    award(state, team, PointKind::Game, GAME_POINTS)
}
