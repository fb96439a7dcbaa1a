//! Session management for the dashboard modes
//!
//! The TUI and headless modes share one setup path; the one-shot fetch runs a
//! single cycle without a session.

pub mod headless_mode;
pub mod messages;
pub mod oneshot;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::run_headless_mode;
pub use oneshot::run_fetch_once;
pub use setup::{SessionData, setup_session};
pub use tui_mode::run_tui_mode;
