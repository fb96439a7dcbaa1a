//! Dashboard header component
//!
//! Renders the title and refresh countdown gauge

use super::super::state::DashboardState;
use crate::sync::StatusLine;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and refresh progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "OPTIONS OI DASHBOARD v{}  |  {} ({})",
        version,
        state.environment,
        state.environment.api_url()
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Loading takes priority, then the countdown to the next timer refresh
    let (progress_text, gauge_color, progress_percent) = match &state.regions.status {
        StatusLine::Loading => {
            // Animated gauge - loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!("LOADING - Fetching {}", state.symbol),
                Color::LightYellow,
                progress,
            )
        }
        _ => match state.seconds_until_refresh() {
            Some(remaining) => {
                let total = state.refresh_interval.as_secs().max(1);
                let elapsed = total.saturating_sub(remaining);
                let progress = ((elapsed as f64 / total as f64) * 100.0) as u16;
                (
                    format!("WAITING - Next refresh in {}s", remaining),
                    Color::LightBlue,
                    progress.min(100),
                )
            }
            None => ("WAITING - Timer not started".to_string(), Color::Gray, 0),
        },
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
