//! Supports and resistances lists

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding};

/// Render supports above resistances.
pub fn render_levels(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_level_list(f, chunks[0], "SUPPORTS", &state.regions.supports, Color::Green);
    render_level_list(
        f,
        chunks[1],
        "RESISTANCES",
        &state.regions.resistances,
        Color::Red,
    );
}

fn render_level_list(f: &mut Frame, area: Rect, title: &str, levels: &[String], color: Color) {
    let items: Vec<ListItem> = levels
        .iter()
        .map(|level| ListItem::new(level.as_str()).style(Style::default().fg(color)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(list, area);
}
