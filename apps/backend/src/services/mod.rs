pub mod clock;
pub mod ids;
pub mod reaper;
pub mod room_service;
pub mod rooms;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::{PlayerId, RoomId};
pub use reaper::spawn_reaper;
pub use room_service::{ActionOutcome, RoomService};
pub use rooms::{InMemoryRoomStore, Room, RoomStore, RoomSummary};
