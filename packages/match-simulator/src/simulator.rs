//! Drives whole matches through the public room service with bots that pick
//! uniformly among their legal options.

use bringten_backend::{
    ActionKind, ActionOutcome, AppError, Phase, PlayerId, RoomId, RoomService, Snapshot, TeamId,
};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

/// Upper bound on actions per match before the run is declared stuck.
pub const ACTION_CAP: u32 = 20_000;

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub match_no: u32,
    pub room_id: String,
    pub winner: TeamId,
    pub team_1_score: u16,
    pub team_2_score: u16,
    /// Deals observed, including redeals after an exhausted go-again.
    pub deals: u32,
    pub actions: u32,
    pub begs: u32,
    pub go_agains: u32,
}

#[derive(Debug)]
pub enum SimError {
    App(AppError),
    /// A bot chose something the room rejected.
    Rejected { action: ActionKind, reason: String },
    /// No seat was due to act before the match ended.
    Stalled { phase: Phase },
    ActionCapReached,
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::App(e) => write!(f, "service error: {e}"),
            SimError::Rejected { action, reason } => {
                write!(f, "bot action {action} rejected: {reason}")
            }
            SimError::Stalled { phase } => write!(f, "no seat to act in phase {phase:?}"),
            SimError::ActionCapReached => write!(f, "action cap of {ACTION_CAP} reached"),
        }
    }
}

impl std::error::Error for SimError {}

impl From<AppError> for SimError {
    fn from(e: AppError) -> Self {
        SimError::App(e)
    }
}

pub struct Simulator<'a> {
    service: &'a RoomService,
    rng: StdRng,
}

impl<'a> Simulator<'a> {
    pub fn new(service: &'a RoomService, bot_seed: u64) -> Self {
        Self {
            service,
            rng: StdRng::seed_from_u64(bot_seed),
        }
    }

    /// Seat four bots in a fresh room and play until a team wins.
    pub fn play_match(&mut self, match_no: u32) -> Result<MatchResult, SimError> {
        let room_id = self.service.create_room(&format!("sim-{match_no}"));
        let mut players = Vec::with_capacity(4);
        for seat in 0..4 {
            players.push(self.service.add_player(&room_id, &format!("bot-{seat}"))?);
        }
        self.service.start_game(&room_id)?;

        let result = self.run(match_no, &room_id, &players);
        // Rooms are not reused between matches.
        self.service.delete_room(&room_id)?;
        result
    }

    fn run(
        &mut self,
        match_no: u32,
        room_id: &RoomId,
        players: &[PlayerId],
    ) -> Result<MatchResult, SimError> {
        let mut actions = 0u32;
        let mut begs = 0u32;
        let mut go_agains = 0u32;
        let mut deals = 1u32;
        let mut last_deck = None;

        loop {
            let view = self.service.current_state_for(room_id, &players[0])?;
            if let Some(winner) = view.winner {
                info!(match_no, %winner, actions, deals, "Match finished");
                return Ok(MatchResult {
                    match_no,
                    room_id: room_id.to_string(),
                    winner,
                    team_1_score: view.team_1_score,
                    team_2_score: view.team_2_score,
                    deals,
                    actions,
                    begs,
                    go_agains,
                });
            }

            // A deck that grows back means the cards were gathered and dealt again.
            if last_deck.is_some_and(|d| view.deck > d) {
                deals += 1;
            }
            last_deck = Some(view.deck);

            if actions >= ACTION_CAP {
                return Err(SimError::ActionCapReached);
            }

            let seat = view.to_act.ok_or(SimError::Stalled { phase: view.phase })?;
            let player = players[usize::from(seat)];
            let snapshot = self.service.current_state_for(room_id, &player)?;
            let (kind, card) = self.choose(&snapshot)?;
            match kind {
                ActionKind::Beg => begs += 1,
                ActionKind::GoAgain => go_agains += 1,
                _ => {}
            }

            debug!(match_no, seat, action = %kind, card = %card, "Bot acts");
            match self
                .service
                .apply_action(room_id, &player, kind.as_str(), &card)?
            {
                ActionOutcome::Applied => actions += 1,
                ActionOutcome::Ignored(reason) => {
                    return Err(SimError::Rejected {
                        action: kind,
                        reason: reason.as_str().to_owned(),
                    })
                }
            }
        }
    }

    fn choose(&mut self, view: &Snapshot) -> Result<(ActionKind, String), SimError> {
        match view.phase {
            Phase::Bidding if view.player_beg => {
                let kind = if self.rng.random_bool(0.5) {
                    ActionKind::GiveOne
                } else {
                    ActionKind::GoAgain
                };
                Ok((kind, String::new()))
            }
            Phase::Bidding => {
                let kind = if self.rng.random_bool(0.5) {
                    ActionKind::Beg
                } else {
                    ActionKind::Stay
                };
                Ok((kind, String::new()))
            }
            Phase::RoundInPlay => {
                let card = view
                    .valid_hand
                    .choose(&mut self.rng)
                    .ok_or(SimError::Stalled { phase: view.phase })?;
                Ok((ActionKind::PlayCard, card.token()))
            }
            phase => Err(SimError::Stalled { phase }),
        }
    }
}
