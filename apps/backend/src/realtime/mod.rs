//! Per-player snapshot delivery.

pub mod hub;
pub mod sink;

pub use hub::SessionRegistry;
pub use sink::{channel_sink, ChannelSink, SinkError, SnapshotSink, Subscription};
