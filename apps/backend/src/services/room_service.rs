//! Room orchestration: bridges the pure domain rules with room storage,
//! per-room locking and snapshot delivery.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::ids::{PlayerId, RoomId};
use super::rooms::{InMemoryRoomStore, Room, RoomStore, RoomSummary, SharedRoom};
use crate::config::EngineConfig;
use crate::domain::snapshot::snapshot_for;
use crate::domain::{
    bidding, derive_room_seed, master_seed_from_u64, parse_card_token, round, tricks, GameState,
    Seat, Snapshot,
};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::ActionKind;
use crate::realtime::{channel_sink, SessionRegistry, Subscription};

/// What became of a player action that reached a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State changed and every player was sent a fresh snapshot.
    Applied,
    /// The action broke a rule and was discarded; nothing changed.
    Ignored(ValidationKind),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

pub struct RoomService {
    config: EngineConfig,
    store: Arc<dyn RoomStore>,
    sessions: Arc<SessionRegistry>,
    clock: Arc<dyn Clock>,
    master_seed: [u8; 32],
    room_seq: AtomicU64,
}

impl RoomService {
    /// Service with an in-memory store, the system clock and an OS-seeded
    /// master seed.
    pub fn new(config: EngineConfig) -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        Self::with_parts(
            config,
            Arc::new(InMemoryRoomStore::new()),
            Arc::new(SystemClock),
            seed,
        )
    }

    /// Deterministic service: same seed, same deals in the same room order.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_parts(
            config,
            Arc::new(InMemoryRoomStore::new()),
            Arc::new(SystemClock),
            master_seed_from_u64(seed),
        )
    }

    pub fn with_parts(
        config: EngineConfig,
        store: Arc<dyn RoomStore>,
        clock: Arc<dyn Clock>,
        master_seed: [u8; 32],
    ) -> Self {
        Self {
            config,
            store,
            sessions: Arc::new(SessionRegistry::new()),
            clock,
            master_seed,
            room_seq: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn create_room(&self, name: &str) -> RoomId {
        let id = RoomId::new();
        let seq = self.room_seq.fetch_add(1, Ordering::Relaxed);
        let seed = derive_room_seed(&self.master_seed, seq);
        let room = Room::new(
            id,
            name.to_owned(),
            self.config.match_rules(),
            seed,
            self.clock.now(),
        );
        self.store.insert(room);
        info!(room_id = %id, room_name = name, "Room created");
        id
    }

    /// Seat a new player with a generated id.
    pub fn add_player(&self, room_id: &RoomId, name: &str) -> Result<PlayerId, AppError> {
        let id = PlayerId::new();
        self.join_as(room_id, id, name)?;
        Ok(id)
    }

    /// Seat a player whose identity is supplied by the caller.
    pub fn join_as(&self, room_id: &RoomId, player_id: PlayerId, name: &str) -> Result<(), AppError> {
        let shared = self.room(room_id)?;
        let mut room = shared.lock();

        if room.player(&player_id).is_some() {
            return Err(AppError::DuplicatePlayer {
                player_id: player_id.to_string(),
            });
        }
        if room.game.game_started() {
            return Err(AppError::AlreadyStarted {
                room_id: room_id.to_string(),
            });
        }
        if room.is_full() {
            return Err(AppError::RoomFull {
                room_id: room_id.to_string(),
            });
        }

        let seat = room.seat_player(player_id, name.to_owned());
        room.last_action = self.clock.now();
        info!(room_id = %room_id, player_id = %player_id, seat, "Player joined");
        self.broadcast(&room);
        Ok(())
    }

    pub fn start_game(&self, room_id: &RoomId) -> Result<(), AppError> {
        let shared = self.room(room_id)?;
        let mut room = shared.lock();

        if room.game.game_started() {
            return Err(AppError::AlreadyStarted {
                room_id: room_id.to_string(),
            });
        }
        if !room.is_full() {
            return Err(AppError::RoomNotFull {
                seated: room.players.len(),
            });
        }

        let backup = Backup::take(&room);
        let Room { game, rng, .. } = &mut *room;
        if let Err(e) = round::start_match(game, rng).and_then(|_| game.check_conservation()) {
            backup.restore(&mut room);
            return Err(e.into());
        }
        room.last_action = self.clock.now();
        info!(room_id = %room_id, dealer = room.game.dealer, "Game started");
        self.broadcast(&room);
        Ok(())
    }

    /// Route a player action into the room's rules.
    ///
    /// Unknown rooms and players are errors; rule violations come back as
    /// [`ActionOutcome::Ignored`] and leave the room untouched.
    pub fn apply_action(
        &self,
        room_id: &RoomId,
        player_id: &PlayerId,
        action: &str,
        card_token: &str,
    ) -> Result<ActionOutcome, AppError> {
        let shared = self.room(room_id)?;
        let mut room = shared.lock();
        if !self.is_live(room_id, &shared) {
            return Err(AppError::room_not_found(room_id));
        }
        let seat = room
            .player(player_id)
            .map(|p| p.seat)
            .ok_or_else(|| AppError::player_not_found(player_id))?;

        let kind = match action.parse::<ActionKind>() {
            Ok(kind) => kind,
            Err(e) => return Ok(ignored(room_id, player_id, action, e)),
        };

        let backup = Backup::take(&room);
        match dispatch(&mut room, seat, kind, card_token) {
            Ok(()) => {
                room.last_action = self.clock.now();
                self.broadcast(&room);
                Ok(ActionOutcome::Applied)
            }
            Err(DomainError::Invariant(detail)) => {
                backup.restore(&mut room);
                warn!(room_id = %room_id, action = %kind, %detail, "Action aborted; room restored");
                Err(AppError::Invariant { detail })
            }
            Err(e) => {
                backup.restore(&mut room);
                Ok(ignored(room_id, player_id, kind.as_str(), e))
            }
        }
    }

    pub fn current_state_for(
        &self,
        room_id: &RoomId,
        player_id: &PlayerId,
    ) -> Result<Snapshot, AppError> {
        let shared = self.room(room_id)?;
        let room = shared.lock();
        let player = room
            .player(player_id)
            .ok_or_else(|| AppError::player_not_found(player_id))?;
        Ok(snapshot_for(&room.header(), &room.game, player.seat, &player.name))
    }

    /// Open a delivery channel for a seated player. The current snapshot is
    /// queued on it straight away.
    pub fn subscribe(&self, room_id: &RoomId, player_id: &PlayerId) -> Result<Subscription, AppError> {
        let shared = self.room(room_id)?;
        let room = shared.lock();
        // A delete or reap that won the lock first has already closed the
        // room's sinks; registering now would leave one nobody closes.
        if !self.is_live(room_id, &shared) {
            return Err(AppError::room_not_found(room_id));
        }
        let player = room
            .player(player_id)
            .ok_or_else(|| AppError::player_not_found(player_id))?;

        let (sink, subscription) = channel_sink();
        let token = self.sessions.register(*room_id, *player_id, Arc::new(sink));
        let snapshot = snapshot_for(&room.header(), &room.game, player.seat, &player.name);
        self.sessions.send_to(room_id, player_id, &snapshot);
        Ok(subscription.with_token(token))
    }

    pub fn delete_room(&self, room_id: &RoomId) -> Result<(), AppError> {
        let shared = self.room(room_id)?;
        let _room = shared.lock();
        if !self.is_live(room_id, &shared) {
            return Err(AppError::room_not_found(room_id));
        }
        self.store.remove(room_id);
        let closed = self.sessions.close_room(room_id);
        info!(room_id = %room_id, closed, "Room deleted");
        Ok(())
    }

    pub fn list_rooms(&self) -> Vec<RoomSummary> {
        self.store.list()
    }

    /// Remove rooms idle for longer than the configured expiry and close
    /// their delivery paths. Returns how many were removed.
    pub fn reap_expired(&self) -> usize {
        let now = self.clock.now();
        let expiry = time::Duration::try_from(self.config.room_expiry).unwrap_or(time::Duration::MAX);

        let mut reaped = 0;
        for id in self.store.ids() {
            let Some(shared) = self.store.get(&id) else {
                continue;
            };
            // Idle check and removal under the same room lock.
            let room = shared.lock();
            if room.is_idle(now, expiry) && self.is_live(&id, &shared) {
                self.store.remove(&id);
                self.sessions.close_room(&id);
                reaped += 1;
            }
        }
        if reaped > 0 {
            info!(reaped, remaining = self.store.ids().len(), "Rooms reaped");
        }
        reaped
    }

    /// Whether `shared` is still the room registered under `room_id`. Call
    /// with the room locked; lock order is always room, then store.
    fn is_live(&self, room_id: &RoomId, shared: &SharedRoom) -> bool {
        self.store
            .get(room_id)
            .is_some_and(|current| Arc::ptr_eq(&current, shared))
    }

    fn room(&self, room_id: &RoomId) -> Result<SharedRoom, AppError> {
        self.store
            .get(room_id)
            .ok_or_else(|| AppError::room_not_found(room_id))
    }

    /// Push a fresh snapshot to every seated player. Runs under the room lock
    /// so per-player order matches mutation order.
    fn broadcast(&self, room: &Room) {
        let header = room.header();
        for player in &room.players {
            if !self.sessions.has_sinks(&room.id, &player.id) {
                continue;
            }
            let snapshot = snapshot_for(&header, &room.game, player.seat, &player.name);
            self.sessions.send_to(&room.id, &player.id, &snapshot);
        }
    }
}

/// Pre-action copy of everything an action may mutate.
struct Backup {
    game: GameState,
    rng: ChaCha20Rng,
}

impl Backup {
    fn take(room: &Room) -> Self {
        Self {
            game: room.game.clone(),
            rng: room.rng.clone(),
        }
    }

    fn restore(self, room: &mut Room) {
        room.game = self.game;
        room.rng = self.rng;
    }
}

fn dispatch(room: &mut Room, seat: Seat, kind: ActionKind, card_token: &str) -> Result<(), DomainError> {
    let Room { game, rng, .. } = room;
    match kind {
        ActionKind::Beg => bidding::beg(game, seat),
        ActionKind::Stay => bidding::stay(game, seat),
        ActionKind::GiveOne => bidding::give_one(game, seat).map(|_| ()),
        ActionKind::GoAgain => bidding::go_again(game, seat, rng).map(|_| ()),
        ActionKind::PlayCard => {
            let result = tricks::play_card(game, seat, parse_card_token(card_token))?;
            if result.round_complete {
                round::finish_round(game, rng)?;
            }
            Ok(())
        }
    }?;
    game.check_conservation()
}

fn ignored(room_id: &RoomId, player_id: &PlayerId, action: &str, err: DomainError) -> ActionOutcome {
    let kind = err.kind().unwrap_or(ValidationKind::PhaseMismatch);
    debug!(room_id = %room_id, player_id = %player_id, action, reason = kind.as_str(), error = %err, "Action ignored");
    ActionOutcome::Ignored(kind)
}
