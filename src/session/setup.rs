//! Session setup and initialization

use crate::api::AnalyticsApi;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, TRIGGER_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::{Event, Trigger};
use crate::sync::{DashboardSync, spawn_refresh_timer};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Backend the session talks to
    pub environment: Environment,
    /// Symbol loaded at start
    pub symbol: String,
    /// Interval between timer refreshes
    pub refresh_interval: Duration,
    /// Starts fetch cycles
    pub sync: DashboardSync,
    /// Completions of fetch cycles
    pub event_receiver: mpsc::Receiver<Event>,
    /// Refresh timer ticks
    pub tick_receiver: mpsc::Receiver<Trigger>,
    /// Shutdown sender to stop the refresh timer
    pub shutdown_sender: broadcast::Sender<()>,
    /// Join handle of the refresh timer task
    pub timer_handle: JoinHandle<()>,
}

/// Sets up a dashboard session
///
/// This function handles the setup shared by the TUI and headless modes:
/// 1. Creates the event and timer channels
/// 2. Sets up the shutdown channel
/// 3. Starts the refresh timer
///
/// The initial cycle is not started here; each mode starts it once its
/// display is ready.
pub fn setup_session(
    api: Arc<dyn AnalyticsApi>,
    symbol: String,
    refresh_interval: Duration,
) -> SessionData {
    let environment = api.environment().clone();
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (tick_sender, tick_receiver) = mpsc::channel::<Trigger>(TRIGGER_QUEUE_SIZE);

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let timer_handle =
        spawn_refresh_timer(refresh_interval, tick_sender, shutdown_sender.subscribe());

    SessionData {
        environment,
        symbol,
        refresh_interval,
        sync: DashboardSync::new(api, event_sender),
        event_receiver,
        tick_receiver,
        shutdown_sender,
        timer_handle,
    }
}
