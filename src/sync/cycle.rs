//! Fetch cycles
//!
//! One cycle reads a symbol, fetches its analytics and reports the outcome as
//! an [`Event`]. Cycles are independent: nothing is shared between them except
//! the monotonically increasing cycle id used to fence stale completions.

use crate::api::AnalyticsApi;
use crate::events::{Event, Trigger};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Starts fetch cycles and routes their completions to the owning loop.
pub struct DashboardSync {
    api: Arc<dyn AnalyticsApi>,
    event_sender: mpsc::Sender<Event>,
    last_cycle: u64,
}

impl DashboardSync {
    pub fn new(api: Arc<dyn AnalyticsApi>, event_sender: mpsc::Sender<Event>) -> Self {
        Self {
            api,
            event_sender,
            last_cycle: 0,
        }
    }

    /// Id of the most recently started cycle.
    pub fn last_cycle(&self) -> u64 {
        self.last_cycle
    }

    /// Starts a cycle for `symbol` and returns its start event.
    ///
    /// The caller applies the start event before yielding, so the status region
    /// shows the in-progress state before the request is sent. The completion
    /// arrives later on the event channel. Overlapping cycles are allowed.
    pub fn trigger(&mut self, symbol: &str, trigger: Trigger) -> (Event, JoinHandle<()>) {
        self.last_cycle += 1;
        let cycle = self.last_cycle;

        let api = Arc::clone(&self.api);
        let sender = self.event_sender.clone();
        let owned_symbol = symbol.to_string();
        let handle = tokio::spawn(async move {
            let event = run_cycle(api.as_ref(), cycle, trigger, &owned_symbol).await;
            let _ = sender.send(event).await;
        });

        (Event::started(cycle, trigger, symbol), handle)
    }
}

/// Performs a single fetch and converts the result into a completion event.
pub async fn run_cycle(
    api: &dyn AnalyticsApi,
    cycle: u64,
    trigger: Trigger,
    symbol: &str,
) -> Event {
    match api.fetch_analytics(symbol).await {
        Ok(snapshot) => Event::updated(cycle, trigger, symbol, snapshot),
        Err(e) => {
            log::error!("Fetch cycle #{} for {:?} failed: {:?}", cycle, symbol, e);
            Event::failed(cycle, trigger, symbol, e.status_text(), e.log_level())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AnalyticsSnapshot, ApiError, MockAnalyticsApi};
    use crate::events::{CycleOutcome, EventType};
    use crate::sync::regions::DashboardRegions;

    fn snapshot(symbol: &str) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            symbol: symbol.to_string(),
            expiry: None,
            underlying: None,
            pcr: 1.0,
            recommendation: "Hold".to_string(),
            supports: vec![100.0, 105.0],
            resistances: Vec::new(),
            strikes_window: Vec::new(),
        }
    }

    #[tokio::test]
    // The symbol is passed through verbatim, even when empty.
    async fn test_symbol_is_not_normalized() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_analytics()
            .withf(|symbol| symbol == " nifty ")
            .times(1)
            .returning(|s| Ok(snapshot(s)));

        let event = run_cycle(&api, 1, Trigger::Manual, " nifty ").await;
        assert_eq!(event.event_type, EventType::Success);
    }

    #[tokio::test]
    // An application error becomes a failed completion with the status text.
    async fn test_failed_cycle_event() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_analytics().returning(|_| {
            Err(ApiError::Http {
                status: 400,
                message: "bad symbol".to_string(),
            })
        });

        let event = run_cycle(&api, 7, Trigger::Timer, "???").await;
        assert_eq!(event.cycle, 7);
        assert_eq!(
            event.outcome,
            Some(CycleOutcome::Failed("Error: bad symbol".to_string()))
        );
    }

    #[tokio::test]
    // Trigger returns the start event at once and the completion follows on the channel.
    async fn test_trigger_reports_start_then_completion() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_analytics()
            .times(2)
            .returning(|s| Ok(snapshot(s)));

        let (tx, mut rx) = mpsc::channel(8);
        let mut sync = DashboardSync::new(Arc::new(api), tx);
        let mut regions = DashboardRegions::new();

        let (started, first) = sync.trigger("NIFTY", Trigger::Initial);
        regions.begin_cycle();
        assert_eq!(started.cycle, 1);
        assert_eq!(regions.status.text(), "Loading...");

        let (_, second) = sync.trigger("NIFTY", Trigger::Manual);
        first.await.unwrap();
        second.await.unwrap();
        assert_eq!(sync.last_cycle(), 2);

        let mut cycles = Vec::new();
        while let Ok(event) = rx.try_recv() {
            cycles.push(event.cycle);
            regions.apply(&event);
        }
        cycles.sort();
        assert_eq!(cycles, vec![1, 2]);
        assert_eq!(regions.supports, vec!["S1: 100", "S2: 105"]);
        assert_eq!(regions.status.text(), "Updated");
    }
}
