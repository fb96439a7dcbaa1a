//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::{Event, Trigger};
use crate::sync::{Applied, DashboardRegions};
use std::error::Error;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. The initial cycle and timer-driven cycles
/// 2. Printing the regions after every rendered completion
/// 3. Ctrl+C shutdown handling
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.symbol, &session.environment);

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut regions = DashboardRegions::new();
    start_cycle(&mut session, &mut regions, Trigger::Initial);

    // Event loop: print regions until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if let Some(output) = render_completion(&mut regions, &event) {
                    println!("{}", output);
                }
            }
            Some(trigger) = session.tick_receiver.recv() => {
                start_cycle(&mut session, &mut regions, trigger);
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    let _ = session.timer_handle.await;
    print_session_exit_success();

    Ok(())
}

fn start_cycle(session: &mut SessionData, regions: &mut DashboardRegions, trigger: Trigger) {
    let (started, _handle) = session.sync.trigger(&session.symbol, trigger);
    regions.begin_cycle();
    println!("{}", started);
}

/// Applies a completion and returns the text to print, or `None` for a stale one.
fn render_completion(regions: &mut DashboardRegions, event: &Event) -> Option<String> {
    match regions.apply(event) {
        Applied::Rendered => Some(format!("{}\n{}\n", event, regions)),
        Applied::Stale => {
            log::debug!(
                "Discarding completion of cycle #{} (cycle #{} already shown)",
                event.cycle,
                regions.last_applied_cycle()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AnalyticsSnapshot, ApiError, MockAnalyticsApi};
    use crate::environment::Environment;
    use crate::logging::LogLevel;
    use crate::session::setup_session;
    use crate::sync::StatusLine;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    #[test]
    // A failure prints the status line; a stale completion prints nothing.
    fn test_render_completion() {
        let mut regions = DashboardRegions::new();
        let failed = Event::failed(
            2,
            Trigger::Timer,
            "BAD",
            "Error: bad symbol".to_string(),
            LogLevel::Error,
        );

        let output = render_completion(&mut regions, &failed).unwrap();
        assert!(output.contains("Status: Error: bad symbol"));
        assert!(output.contains("No data yet"));

        let stale = Event::failed(
            1,
            Trigger::Initial,
            "BAD",
            "Error: older".to_string(),
            LogLevel::Error,
        );
        assert_eq!(render_completion(&mut regions, &stale), None);
    }

    #[test]
    // Printed completions carry no escape sequences from the server.
    fn test_render_completion_strips_escapes() {
        let mut regions = DashboardRegions::new();
        let failed = Event::failed(
            1,
            Trigger::Manual,
            "NIFTY",
            "Error: bad\x1b]0;title\x07".to_string(),
            LogLevel::Error,
        );

        let output = render_completion(&mut regions, &failed).unwrap();
        assert!(!output.contains('\x1b'));
        assert!(!output.contains('\x07'));
        assert!(output.contains("Status: Error: bad]0;title"));
    }

    #[tokio::test(start_paused = true)]
    // A failed initial load does not stop the timer from refreshing later.
    async fn test_timer_cycle_recovers_after_failure() {
        let calls = AtomicUsize::new(0);
        let mut api = MockAnalyticsApi::new();
        api.expect_environment().return_const(Environment::Local);
        api.expect_fetch_analytics().times(2).returning(move |symbol| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(ApiError::Http {
                    status: 503,
                    message: "upstream down".to_string(),
                });
            }
            Ok(AnalyticsSnapshot {
                symbol: symbol.to_string(),
                expiry: Some("2024-06-27".to_string()),
                underlying: None,
                pcr: 0.8,
                recommendation: "Bearish".to_string(),
                supports: vec![22400.0],
                resistances: vec![],
                strikes_window: vec![],
            })
        });

        let start = Instant::now();
        let mut session =
            setup_session(Arc::new(api), "NIFTY".to_string(), Duration::from_secs(60));
        let mut regions = DashboardRegions::new();

        start_cycle(&mut session, &mut regions, Trigger::Initial);
        let event = session.event_receiver.recv().await.unwrap();
        assert!(render_completion(&mut regions, &event).is_some());
        assert_eq!(
            regions.status,
            StatusLine::Failed("Error: upstream down".to_string())
        );
        assert!(regions.summary.is_none());

        let trigger = session.tick_receiver.recv().await.unwrap();
        assert_eq!(trigger, Trigger::Timer);
        assert!(start.elapsed() >= Duration::from_secs(60));

        start_cycle(&mut session, &mut regions, trigger);
        assert_eq!(regions.status, StatusLine::Loading);
        let event = session.event_receiver.recv().await.unwrap();
        assert_eq!(event.cycle, 2);
        let output = render_completion(&mut regions, &event).unwrap();
        assert!(output.contains("Status: Updated"));
        assert_eq!(regions.status, StatusLine::Updated);
        assert_eq!(regions.supports, vec!["S1: 22400"]);

        session.shutdown_sender.send(()).unwrap();
        session.timer_handle.await.unwrap();
    }
}
