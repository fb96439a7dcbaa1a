//! Event System
//!
//! Types passed from fetch cycles to whichever loop owns the display regions.

use crate::api::AnalyticsSnapshot;
use crate::logging::{LogLevel, should_log_with_env};
use crate::sync::regions::clean;
use chrono::Local;
use std::fmt::Display;

/// What started a fetch cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Trigger {
    /// First cycle, issued at start-up.
    Initial,
    /// User-requested refresh.
    Manual,
    /// Recurring refresh timer.
    Timer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Refresh,
    Success,
    Error,
}

/// Result of a completed fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Updated(Box<AnalyticsSnapshot>),
    /// Failure reason, already formatted for the status line.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Monotonic id of the cycle this event belongs to.
    pub cycle: u64,
    pub trigger: Trigger,
    pub symbol: String,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Present on completion events only.
    pub outcome: Option<CycleOutcome>,
}

impl Event {
    fn new(
        cycle: u64,
        trigger: Trigger,
        symbol: &str,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
        outcome: Option<CycleOutcome>,
    ) -> Self {
        // Symbols and messages may echo server text and are printed as-is.
        Self {
            cycle,
            trigger,
            symbol: clean(symbol),
            msg: clean(&msg),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            outcome,
        }
    }

    pub fn started(cycle: u64, trigger: Trigger, symbol: &str) -> Self {
        Self::new(
            cycle,
            trigger,
            symbol,
            format!("{} refresh: fetching {}", trigger, symbol),
            EventType::Refresh,
            LogLevel::Debug,
            None,
        )
    }

    pub fn updated(cycle: u64, trigger: Trigger, symbol: &str, snapshot: AnalyticsSnapshot) -> Self {
        let msg = format!(
            "Updated {} ({} strikes)",
            snapshot.symbol,
            snapshot.strikes_window.len()
        );
        Self::new(
            cycle,
            trigger,
            symbol,
            msg,
            EventType::Success,
            LogLevel::Info,
            Some(CycleOutcome::Updated(Box::new(snapshot))),
        )
    }

    pub fn failed(
        cycle: u64,
        trigger: Trigger,
        symbol: &str,
        status_text: String,
        log_level: LogLevel,
    ) -> Self {
        let status_text = clean(&status_text);
        Self::new(
            cycle,
            trigger,
            symbol,
            format!("{} ({})", status_text, symbol),
            EventType::Error,
            log_level,
            Some(CycleOutcome::Failed(status_text)),
        )
    }

    pub fn is_completion(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn should_display(&self) -> bool {
        // Always show outcomes and info level events
        if self.event_type != EventType::Refresh || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] #{} {}",
            self.event_type, self.timestamp, self.cycle, self.msg
        )
    }
}
