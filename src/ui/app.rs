//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::{Event as SyncEvent, Trigger};
use crate::sync::DashboardSync;
use crate::ui::dashboard::{DashboardState, KeyAction, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub symbol: String,
    pub refresh_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, symbol: String, refresh_interval: Duration) -> Self {
        Self {
            with_background_color,
            symbol,
            refresh_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the analytics regions.
    Dashboard,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Display regions and input state. Exists from start-up so the initial
    /// cycle is tracked while the splash screen is showing.
    dashboard: DashboardState,

    /// Starts fetch cycles.
    sync: DashboardSync,

    /// Receives cycle completions from fetch tasks.
    event_receiver: mpsc::Receiver<SyncEvent>,

    /// Receives refresh timer ticks.
    tick_receiver: mpsc::Receiver<Trigger>,

    /// Broadcasts shutdown to the refresh timer.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        sync: DashboardSync,
        event_receiver: mpsc::Receiver<SyncEvent>,
        tick_receiver: mpsc::Receiver<Trigger>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(environment, Instant::now(), ui_config),
            sync,
            event_receiver,
            tick_receiver,
            shutdown_sender,
        }
    }

    /// Starts a cycle for the symbol currently in the symbol field.
    fn start_cycle(&mut self, trigger: Trigger) {
        let (started, _handle) = self.sync.trigger(&self.dashboard.symbol, trigger);
        self.dashboard.begin_cycle(started);
    }

    /// Moves completions into the dashboard queue and turns timer ticks into cycles.
    fn drain_channels(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
        while let Ok(trigger) = self.tick_receiver.try_recv() {
            self.start_cycle(trigger);
        }
    }

    fn shutdown(&self) {
        let _ = self.shutdown_sender.send(());
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(1);

    app.start_cycle(Trigger::Initial);

    // UI event loop
    loop {
        app.drain_channels();
        app.dashboard.update();
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                if app.current_screen == Screen::Splash {
                    // Any key press other than quit skips the splash screen
                    if matches!(key.code, event::KeyCode::Esc | event::KeyCode::Char('q')) {
                        app.shutdown();
                        return Ok(());
                    }
                    app.current_screen = Screen::Dashboard;
                    continue;
                }

                match app.dashboard.handle_key(key) {
                    KeyAction::Quit => {
                        app.shutdown();
                        return Ok(());
                    }
                    KeyAction::Refresh => app.start_cycle(Trigger::Manual),
                    KeyAction::None => {}
                }
            }
        }

        // Let spawned fetches make progress between frames
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, &app.dashboard),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}
