//! Dashboard synchronisation
//!
//! Keeps the display regions consistent with the latest analytics for the
//! entered symbol: cycle dispatch, region model and the refresh timer.

pub mod cycle;
pub mod regions;
pub mod timer;

pub use cycle::DashboardSync;
pub use regions::{Applied, DashboardRegions, StatusLine};
pub use timer::spawn_refresh_timer;
