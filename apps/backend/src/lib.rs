#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Bring Ten room engine: the rules of a four-seat partnered Pitch variant,
//! rooms that run matches of it, and per-player snapshot delivery.

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod realtime;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::EngineConfig;
pub use domain::{Card, Phase, Snapshot, TeamId};
pub use error::AppError;
pub use errors::ErrorCode;
pub use protocol::ActionKind;
pub use realtime::{SnapshotSink, Subscription};
pub use services::{
    spawn_reaper, ActionOutcome, Clock, ManualClock, PlayerId, RoomId, RoomService, RoomSummary,
    SystemClock,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
