//! Recurring refresh timer

use crate::events::Trigger;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Spawns the refresh timer.
///
/// Emits [`Trigger::Timer`] every `period`, starting one period from now (the
/// initial load is triggered separately). Ticks fire whether or not earlier
/// cycles are still in flight. The task ends on shutdown or when the receiving
/// loop goes away.
pub fn spawn_refresh_timer(
    period: Duration,
    tick_sender: mpsc::Sender<Trigger>,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match tick_sender.try_send(Trigger::Timer) {
                        // A full queue already holds a pending refresh
                        Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => {}
                        Err(mpsc::error::TrySendError::Closed(_)) => break,
                    }
                }
                _ = shutdown.recv() => {
                    break;
                }
            }
        }
        log::debug!("Refresh timer stopped");
    })
}
