use serde::{Deserialize, Serialize};

use crate::domain::dealing::Deck;
use crate::domain::rules::{DEFAULT_HAND_SIZE, DEFAULT_WIN_THRESHOLD, DECK_SIZE, PLAYERS};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3

/// Partnership. Seats 0 and 2 form team one, seats 1 and 3 team two.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamId {
    One,
    Two,
}

impl TeamId {
    pub const BOTH: [TeamId; 2] = [TeamId::One, TeamId::Two];

    pub const fn of_seat(seat: Seat) -> Self {
        if seat % 2 == 0 {
            TeamId::One
        } else {
            TeamId::Two
        }
    }

    pub const fn index(self) -> usize {
        match self {
            TeamId::One => 0,
            TeamId::Two => 1,
        }
    }

    pub const fn seats(self) -> [Seat; 2] {
        match self {
            TeamId::One => [0, 2],
            TeamId::Two => [1, 3],
        }
    }

    pub const fn other(self) -> Self {
        match self {
            TeamId::One => TeamId::Two,
            TeamId::Two => TeamId::One,
        }
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamId::One => f.write_str("team_1"),
            TeamId::Two => f.write_str("team_2"),
        }
    }
}

/// Overall match progression phases.
///
/// Dealing and round scoring are not phases of their own: both run to
/// completion inside the operation that triggers them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Room is filling up; no cards dealt.
    Lobby,
    /// Cards dealt and trump flipped; first actor begs or stays.
    Bidding,
    /// Tricks are being played.
    RoundInPlay,
    /// A team reached the win threshold.
    MatchOver,
}

/// One card on the table together with the seat that played it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, Default)]
pub struct Team {
    /// Cumulative match score.
    pub score: u16,
    /// Cards captured this round.
    pub pile: Vec<Card>,
}

/// Per-round bookkeeping for the high/low/jack/hang-jack points.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RoundTrackers {
    pub high: Option<Play>,
    pub low: Option<Play>,
    pub jack_played: bool,
    pub jack_claim: Option<TeamId>,
    pub hang_jack_claim: Option<TeamId>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MatchRules {
    pub win_threshold: u16,
    pub hand_size: u8,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

/// Entire match container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub rules: MatchRules,
    pub phase: Phase,
    /// Undealt cards of the current round.
    pub deck: Deck,
    pub hands: [Vec<Card>; PLAYERS],
    pub teams: [Team; 2],
    pub dealer: Seat,
    /// Seat left of the dealer; begs or stays and leads the first trick.
    pub first_actor: Seat,
    pub turn: Seat,
    /// Every card flipped this round, oldest first. The last one is trump.
    pub turned_up: Vec<Card>,
    /// Cards on the table for the current trick, in play order.
    pub lift: Vec<Play>,
    pub begged: bool,
    pub stayed: bool,
    pub round_started: bool,
    pub trackers: RoundTrackers,
    pub winner: Option<TeamId>,
    /// 1-based once the first round is dealt.
    pub round_no: u32,
}

impl GameState {
    pub fn new(rules: MatchRules) -> Self {
        Self {
            rules,
            phase: Phase::Lobby,
            deck: Deck::new_full(),
            hands: Default::default(),
            teams: Default::default(),
            dealer: 0,
            first_actor: round_start_seat(0),
            turn: round_start_seat(0),
            turned_up: Vec::new(),
            lift: Vec::with_capacity(PLAYERS),
            begged: false,
            stayed: false,
            round_started: false,
            trackers: RoundTrackers::default(),
            winner: None,
            round_no: 0,
        }
    }

    pub fn game_started(&self) -> bool {
        self.phase != Phase::Lobby
    }

    pub fn trump(&self) -> Option<Card> {
        self.turned_up.last().copied()
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump().map(|c| c.suit)
    }

    /// First card of the current trick.
    pub fn call_card(&self) -> Option<Card> {
        self.lift.first().map(|p| p.card)
    }

    pub fn team(&self, team: TeamId) -> &Team {
        &self.teams[team.index()]
    }

    pub fn team_mut(&mut self, team: TeamId) -> &mut Team {
        &mut self.teams[team.index()]
    }

    pub fn score(&self, team: TeamId) -> u16 {
        self.team(team).score
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat as usize % PLAYERS]
    }

    /// Seat expected to act next, if anyone.
    ///
    /// During bidding that is the first actor until a beg is pending, then
    /// the dealer.
    pub fn to_act(&self) -> Option<Seat> {
        match self.phase {
            Phase::Bidding if self.begged => Some(self.dealer),
            Phase::Bidding => Some(self.first_actor),
            Phase::RoundInPlay => Some(self.turn),
            Phase::Lobby | Phase::MatchOver => None,
        }
    }

    pub fn all_hands_empty(&self) -> bool {
        self.hands.iter().all(Vec::is_empty)
    }

    /// Cards accounted for across deck, hands, table, piles and flips.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hands.iter().map(Vec::len).sum::<usize>()
            + self.lift.len()
            + self.teams.iter().map(|t| t.pile.len()).sum::<usize>()
            + self.turned_up.len()
    }

    pub fn check_conservation(&self) -> Result<(), DomainError> {
        let count = self.card_count();
        if count != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "card conservation broken: {count} cards accounted for"
            )));
        }
        Ok(())
    }
}

pub fn require_phase(state: &GameState, expected: Phase) -> Result<(), DomainError> {
    if state.phase != expected {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("expected {:?}, in {:?}", expected, state.phase),
        ));
    }
    Ok(())
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Round-start seat (player to the left of the dealer).
#[inline]
pub fn round_start_seat(dealer: Seat) -> Seat {
    next_seat(dealer)
}

/// The four seats in turn order starting at `start`.
#[inline]
pub fn turn_order(start: Seat) -> [Seat; PLAYERS] {
    [
        start % PLAYERS as u8,
        seat_offset(start, 1),
        seat_offset(start, 2),
        seat_offset(start, 3),
    ]
}
