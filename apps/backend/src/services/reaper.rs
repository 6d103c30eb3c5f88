use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::room_service::RoomService;

/// Sweep idle rooms every `sweep_interval` until `cancel` fires.
pub fn spawn_reaper(service: Arc<RoomService>, cancel: CancellationToken) -> JoinHandle<()> {
    let period = service.config().sweep_interval;
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        info!(every_secs = period.as_secs(), "Room reaper running");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let reaped = service.reap_expired();
                    debug!(reaped, "Reaper sweep");
                }
            }
        }
        info!("Room reaper stopped");
    })
}
