//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events and keys

use super::state::{DashboardState, InputMode, KeyAction};

use crate::consts::cli_consts::MAX_SYMBOL_LEN;
use crate::events::{Event, Trigger};
use crate::sync::Applied;
use crossterm::event::{KeyCode, KeyEvent};

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with a new tick and any queued completions.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(mut event) = self.pending_events.pop_front() {
            self.process_event(&event);
            // The regions hold the rendered result; the log keeps only the message
            event.outcome = None;
            self.add_to_activity_log(event);
        }
    }

    /// Record the start of a cycle. Must run before the UI yields, so the status
    /// region reads `Loading...` before any response can arrive.
    pub fn begin_cycle(&mut self, started: Event) {
        self.regions.begin_cycle();
        if matches!(started.trigger, Trigger::Initial | Trigger::Timer) {
            self.set_timer_mark(Instant::now());
        }
        self.add_to_activity_log(started);
    }

    /// Process a single completion and update the regions
    fn process_event(&mut self, event: &Event) {
        if !event.is_completion() {
            return;
        }
        if self.regions.apply(event) == Applied::Stale {
            log::debug!(
                "Discarding completion of cycle #{} (cycle #{} already shown)",
                event.cycle,
                self.regions.last_applied_cycle()
            );
            self.record_stale_completion();
        }
    }

    /// Interpret a key press in the current input mode.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Normal => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
                KeyCode::Char('r') | KeyCode::F(5) => KeyAction::Refresh,
                KeyCode::Char('/') | KeyCode::Char('s') => {
                    self.symbol_draft = self.symbol.clone();
                    self.input_mode = InputMode::Editing;
                    KeyAction::None
                }
                _ => KeyAction::None,
            },
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => {
                // Committed verbatim: no trimming or case folding
                self.symbol = self.symbol_draft.clone();
                self.input_mode = InputMode::Normal;
                KeyAction::Refresh
            }
            KeyCode::Esc => {
                self.symbol_draft = self.symbol.clone();
                self.input_mode = InputMode::Normal;
                KeyAction::None
            }
            KeyCode::Backspace => {
                self.symbol_draft.pop();
                KeyAction::None
            }
            KeyCode::Char(c) if !c.is_control() => {
                if self.symbol_draft.chars().count() < MAX_SYMBOL_LEN {
                    self.symbol_draft.push(c);
                }
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AnalyticsSnapshot;
    use crate::environment::Environment;
    use crate::logging::LogLevel;
    use crate::ui::app::UIConfig;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, "NIFTY".to_string(), Duration::from_secs(60)),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            symbol: "NIFTY".to_string(),
            expiry: None,
            underlying: None,
            pcr: 0.9,
            recommendation: "Hold".to_string(),
            supports: vec![100.0],
            resistances: vec![120.0],
            strikes_window: Vec::new(),
        }
    }

    #[test]
    // Starting a cycle shows the loading status and logs the start.
    fn test_begin_cycle() {
        let mut state = state();
        state.begin_cycle(Event::started(1, Trigger::Initial, "NIFTY"));

        assert_eq!(state.regions.status.text(), "Loading...");
        assert_eq!(state.activity_logs.len(), 1);
        assert!(state.timer_mark().is_some());
        assert!(matches!(state.seconds_until_refresh(), Some(59 | 60)));
    }

    #[test]
    // Queued completions reach the regions on the next update.
    fn test_update_applies_completions() {
        let mut state = state();
        state.begin_cycle(Event::started(1, Trigger::Manual, "NIFTY"));
        state.add_event(Event::updated(1, Trigger::Manual, "NIFTY", snapshot()));
        state.update();

        assert_eq!(state.regions.status.text(), "Updated");
        assert_eq!(state.regions.supports, vec!["S1: 100"]);
        assert!(state.pending_events.is_empty());
        assert_eq!(state.activity_logs.len(), 2);
        // Manual refreshes do not move the timer countdown
        assert!(state.timer_mark().is_none());
    }

    #[test]
    // A late completion from an older cycle is counted and ignored.
    fn test_stale_completion_counted() {
        let mut state = state();
        state.add_event(Event::updated(2, Trigger::Timer, "NIFTY", snapshot()));
        state.add_event(Event::failed(
            1,
            Trigger::Timer,
            "NIFTY",
            "Error: timeout".to_string(),
            LogLevel::Warn,
        ));
        state.update();

        assert_eq!(state.regions.status.text(), "Updated");
        assert_eq!(state.stale_completions(), 1);
    }

    #[test]
    // Logged completions keep their message but not the snapshot.
    fn test_activity_log_drops_snapshots() {
        let mut state = state();
        for cycle in 1..=5 {
            state.add_event(Event::updated(cycle, Trigger::Timer, "NIFTY", snapshot()));
        }
        state.update();

        assert_eq!(state.activity_logs.len(), 5);
        assert!(state.activity_logs.iter().all(|e| e.outcome.is_none()));
        assert_eq!(state.activity_logs[4].msg, "Updated NIFTY (0 strikes)");
        assert_eq!(state.regions.status.text(), "Updated");
    }

    #[test]
    // Editing commits the typed symbol verbatim and asks for a refresh.
    fn test_symbol_editing() {
        let mut state = state();
        assert_eq!(state.handle_key(key(KeyCode::Char('/'))), KeyAction::None);
        assert_eq!(state.input_mode, InputMode::Editing);

        for _ in 0.."NIFTY".len() {
            state.handle_key(key(KeyCode::Backspace));
        }
        for c in "bank q".chars() {
            assert_eq!(state.handle_key(key(KeyCode::Char(c))), KeyAction::None);
        }
        assert_eq!(state.symbol, "NIFTY");

        assert_eq!(state.handle_key(key(KeyCode::Enter)), KeyAction::Refresh);
        assert_eq!(state.symbol, "bank q");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    // Escape abandons the draft instead of quitting.
    fn test_escape_cancels_editing() {
        let mut state = state();
        state.handle_key(key(KeyCode::Char('s')));
        state.handle_key(key(KeyCode::Char('X')));
        assert_eq!(state.handle_key(key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(state.symbol, "NIFTY");
        assert_eq!(state.symbol_draft, "NIFTY");

        assert_eq!(state.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn test_normal_mode_keys() {
        let mut state = state();
        assert_eq!(state.handle_key(key(KeyCode::Char('r'))), KeyAction::Refresh);
        assert_eq!(state.handle_key(key(KeyCode::F(5))), KeyAction::Refresh);
        assert_eq!(state.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(state.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
    }
}
