//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event;
use crate::sync::DashboardRegions;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Whether keystrokes go to the symbol field or to dashboard commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// What the application loop should do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Refresh,
    Quit,
}

/// Dashboard state: the display regions plus everything around them.
#[derive(Debug)]
pub struct DashboardState {
    /// The backend the dashboard is talking to.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// The symbol every new cycle reads.
    pub symbol: String,
    /// Text in the symbol field while editing.
    pub symbol_draft: String,
    /// Current keyboard mode.
    pub input_mode: InputMode,
    /// Summary, levels, strike table, overview and status.
    pub regions: DashboardRegions,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Interval between automatic refreshes.
    pub refresh_interval: Duration,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// When the refresh timer last fired (or was started)
    timer_mark: Option<Instant>,
    /// Completions dropped because a newer cycle had already been rendered
    stale_completions: u64,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            symbol_draft: ui_config.symbol.clone(),
            symbol: ui_config.symbol,
            input_mode: InputMode::Normal,
            regions: DashboardRegions::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            refresh_interval: ui_config.refresh_interval,
            with_background_color: ui_config.with_background_color,
            tick: 0,
            timer_mark: None,
            stale_completions: 0,
        }
    }

    pub fn timer_mark(&self) -> Option<Instant> {
        self.timer_mark
    }

    pub fn stale_completions(&self) -> u64 {
        self.stale_completions
    }

    pub(super) fn set_timer_mark(&mut self, at: Instant) {
        self.timer_mark = Some(at);
    }

    pub(super) fn record_stale_completion(&mut self) {
        self.stale_completions += 1;
    }

    /// Seconds until the timer fires again, once it has been started.
    pub fn seconds_until_refresh(&self) -> Option<u64> {
        self.timer_mark.map(|at| {
            self.refresh_interval
                .saturating_sub(at.elapsed())
                .as_secs()
        })
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
