use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_stream::wrappers::UnboundedReceiverStream;
use uuid::Uuid;

use crate::domain::Snapshot;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Snapshot consumer has gone away")]
    Closed,
}

/// Outbound path for one player's snapshots. Delivery must not block.
pub trait SnapshotSink: Send + Sync {
    fn deliver(&self, snapshot: Snapshot) -> Result<(), SinkError>;
}

/// In-process sink backed by an unbounded tokio channel (FIFO per sink).
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<Snapshot>,
}

impl SnapshotSink for ChannelSink {
    fn deliver(&self, snapshot: Snapshot) -> Result<(), SinkError> {
        self.tx.send(snapshot).map_err(|_| SinkError::Closed)
    }
}

/// Receiving end handed to whoever consumes a player's snapshots.
///
/// Dropping it is a normal teardown: the sink is unregistered the next time
/// a delivery to it fails.
#[derive(Debug)]
pub struct Subscription {
    token: Uuid,
    rx: UnboundedReceiver<Snapshot>,
}

impl Subscription {
    pub(crate) fn with_token(mut self, token: Uuid) -> Self {
        self.token = token;
        self
    }

    pub fn token(&self) -> Uuid {
        self.token
    }

    /// Next snapshot; `None` once the room has been torn down.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<Snapshot> {
        self.rx.try_recv().ok()
    }

    /// Everything already queued, without waiting.
    pub fn drain(&mut self) -> Vec<Snapshot> {
        let mut out = Vec::new();
        while let Ok(s) = self.rx.try_recv() {
            out.push(s);
        }
        out
    }

    pub fn into_stream(self) -> UnboundedReceiverStream<Snapshot> {
        UnboundedReceiverStream::new(self.rx)
    }
}

pub fn channel_sink() -> (ChannelSink, Subscription) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        ChannelSink { tx },
        Subscription {
            token: Uuid::nil(),
            rx,
        },
    )
}
