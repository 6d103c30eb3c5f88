//! Room records and the registry that owns them.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::ids::{PlayerId, RoomId};
use crate::domain::rules::PLAYERS;
use crate::domain::snapshot::{RoomHeader, SeatPublic};
use crate::domain::{GameState, MatchRules, Seat, TeamId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatedPlayer {
    pub id: PlayerId,
    pub name: String,
    pub seat: Seat,
}

/// One table: roster, match state and the room's own RNG.
#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub host: Option<PlayerId>,
    pub players: Vec<SeatedPlayer>,
    pub game: GameState,
    pub rng: ChaCha20Rng,
    pub last_action: OffsetDateTime,
}

impl Room {
    pub fn new(
        id: RoomId,
        name: String,
        rules: MatchRules,
        seed: [u8; 32],
        now: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            name,
            host: None,
            players: Vec::with_capacity(PLAYERS),
            game: GameState::new(rules),
            rng: ChaCha20Rng::from_seed(seed),
            last_action: now,
        }
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= PLAYERS
    }

    pub fn player(&self, id: &PlayerId) -> Option<&SeatedPlayer> {
        self.players.iter().find(|p| p.id == *id)
    }

    /// Seat the player in the next free seat. The first one seated hosts.
    pub fn seat_player(&mut self, id: PlayerId, name: String) -> Seat {
        let seat = self.players.len() as Seat;
        if self.host.is_none() {
            self.host = Some(id);
        }
        self.players.push(SeatedPlayer { id, name, seat });
        seat
    }

    pub fn host_name(&self) -> Option<&str> {
        let host = self.host?;
        self.player(&host).map(|p| p.name.as_str())
    }

    pub fn header(&self) -> RoomHeader {
        RoomHeader {
            room_id: self.id.to_string(),
            room_name: self.name.clone(),
            host: self.host_name().map(str::to_owned),
            players: self
                .players
                .iter()
                .map(|p| SeatPublic {
                    seat: p.seat,
                    name: p.name.clone(),
                    team: TeamId::of_seat(p.seat),
                })
                .collect(),
        }
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            id: self.id,
            name: self.name.clone(),
            host: self.host_name().map(str::to_owned),
            num_players: self.players.len(),
        }
    }

    pub fn is_idle(&self, now: OffsetDateTime, expiry: time::Duration) -> bool {
        now - self.last_action > expiry
    }
}

/// Directory entry for a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: RoomId,
    pub name: String,
    pub host: Option<String>,
    pub num_players: usize,
}

pub type SharedRoom = Arc<Mutex<Room>>;

/// Registry of live rooms.
pub trait RoomStore: Send + Sync {
    fn insert(&self, room: Room) -> SharedRoom;
    fn get(&self, id: &RoomId) -> Option<SharedRoom>;
    fn remove(&self, id: &RoomId) -> Option<SharedRoom>;
    fn ids(&self) -> Vec<RoomId>;
    fn list(&self) -> Vec<RoomSummary>;
}

#[derive(Default)]
pub struct InMemoryRoomStore {
    rooms: DashMap<RoomId, SharedRoom>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl RoomStore for InMemoryRoomStore {
    fn insert(&self, room: Room) -> SharedRoom {
        let id = room.id;
        let shared = Arc::new(Mutex::new(room));
        self.rooms.insert(id, shared.clone());
        shared
    }

    fn get(&self, id: &RoomId) -> Option<SharedRoom> {
        self.rooms.get(id).map(|r| r.value().clone())
    }

    fn remove(&self, id: &RoomId) -> Option<SharedRoom> {
        self.rooms.remove(id).map(|(_, room)| room)
    }

    fn ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(|r| *r.key()).collect()
    }

    fn list(&self) -> Vec<RoomSummary> {
        // Collect handles first so no map shard is held while a room is locked.
        let rooms: Vec<SharedRoom> = self.rooms.iter().map(|r| r.value().clone()).collect();
        let mut out: Vec<RoomSummary> = rooms.iter().map(|r| r.lock().summary()).collect();
        out.sort_by_key(|s| s.id);
        out
    }
}
