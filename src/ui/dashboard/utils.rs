//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::{EventType, Trigger};
use crate::sync::StatusLine;
use ratatui::prelude::Color;

/// Get a ratatui color for an activity entry based on what triggered it
pub fn get_trigger_color(trigger: &Trigger) -> Color {
    match trigger {
        Trigger::Initial => Color::Cyan,
        Trigger::Manual => Color::Yellow,
        Trigger::Timer => Color::LightBlue,
    }
}

/// Color of the status region
pub fn get_status_color(status: &StatusLine) -> Color {
    match status {
        StatusLine::Idle => Color::Gray,
        StatusLine::Loading => Color::LightYellow,
        StatusLine::Updated => Color::LightGreen,
        StatusLine::Failed(_) => Color::LightRed,
    }
}

/// Icon prefix for an activity entry
pub fn get_event_icon(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Success => "✅",
        EventType::Error => "❌",
        EventType::Refresh => "↻",
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM:SS from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min_sec) = time_part.get(0..8) {
                    return format!("{} {}", month_day, hour_min_sec);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Shorten reqwest's verbose transport errors for the activity log.
///
/// The status line keeps the full text; only the log is abbreviated.
pub fn clean_http_error_message(msg: &str) -> String {
    if !msg.contains("error sending request") {
        return msg.to_string();
    }
    if msg.contains("timed out") {
        return "Error: request timed out".to_string();
    }
    if msg.contains("onnect") {
        return "Error: backend unreachable".to_string();
    }
    "Error: network error".to_string()
}

/// Compact rendering of large open interest figures: 1.2M, 45.3K.
pub fn format_oi(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{}", value)
    }
}
