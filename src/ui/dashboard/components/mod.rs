//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod levels;
pub mod logs;
pub mod oi_chart;
pub mod strikes;
pub mod summary;
