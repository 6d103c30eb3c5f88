use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, warn};
use uuid::Uuid;

use super::sink::SnapshotSink;
use crate::domain::Snapshot;
use crate::services::ids::{PlayerId, RoomId};

struct SessionEntry {
    player: PlayerId,
    sink: Arc<dyn SnapshotSink>,
}

/// Live delivery sinks, grouped by room and keyed by a per-registration token.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<RoomId, DashMap<Uuid, SessionEntry>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn register(&self, room: RoomId, player: PlayerId, sink: Arc<dyn SnapshotSink>) -> Uuid {
        let token = Uuid::new_v4();
        let entry = self.sessions.entry(room).or_default();
        entry.insert(token, SessionEntry { player, sink });
        debug!(room_id = %room, player_id = %player, %token, "Sink registered");
        token
    }

    pub fn unregister(&self, room: &RoomId, token: Uuid) {
        if let Some(entry) = self.sessions.get(room) {
            entry.remove(&token);
        }
        self.sessions.remove_if(room, |_, sinks| sinks.is_empty());
    }

    /// Hand `snapshot` to every sink `player` has in `room`. Sinks whose
    /// consumer is gone are dropped.
    pub fn send_to(&self, room: &RoomId, player: &PlayerId, snapshot: &Snapshot) {
        let mut dead = Vec::new();
        if let Some(entry) = self.sessions.get(room) {
            for session in entry.iter().filter(|s| s.value().player == *player) {
                if session.value().sink.deliver(snapshot.clone()).is_err() {
                    dead.push(*session.key());
                }
            }
        }
        for token in dead {
            warn!(room_id = %room, player_id = %player, %token, "Snapshot delivery failed; dropping sink");
            self.unregister(room, token);
        }
    }

    pub fn has_sinks(&self, room: &RoomId, player: &PlayerId) -> bool {
        self.sessions
            .get(room)
            .is_some_and(|entry| entry.iter().any(|s| s.value().player == *player))
    }

    pub fn session_count(&self, room: &RoomId) -> usize {
        self.sessions.get(room).map_or(0, |entry| entry.len())
    }

    /// Drop every sink of a room, closing their channels.
    pub fn close_room(&self, room: &RoomId) -> usize {
        let closed = self
            .sessions
            .remove(room)
            .map_or(0, |(_, sinks)| sinks.len());
        if closed > 0 {
            debug!(room_id = %room, closed, "Room sinks closed");
        }
        closed
    }
}
