//! One-shot fetch: a single cycle printed to stdout

use crate::api::AnalyticsApi;
use crate::events::{CycleOutcome, Trigger};
use crate::sync::DashboardRegions;
use crate::sync::cycle::run_cycle;
use std::error::Error;

/// Runs one cycle for `symbol` and prints the regions, or the snapshot as JSON.
///
/// Returns the status text as an error when the cycle fails.
pub async fn run_fetch_once(
    api: &dyn AnalyticsApi,
    symbol: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut regions = DashboardRegions::new();
    regions.begin_cycle();
    let event = run_cycle(api, 1, Trigger::Manual, symbol).await;
    regions.apply(&event);

    match event.outcome {
        Some(CycleOutcome::Updated(snapshot)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", regions);
            }
            Ok(())
        }
        Some(CycleOutcome::Failed(status_text)) => Err(status_text.into()),
        None => Err(event.msg.into()),
    }
}
