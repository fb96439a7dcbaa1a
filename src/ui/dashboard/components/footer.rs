//! Dashboard footer component
//!
//! Renders the status region and key hints

use super::super::state::{DashboardState, InputMode};
use super::super::utils::get_status_color;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer: status on the left, keys on the right.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(52)])
        .split(area);

    let status = &state.regions.status;
    let status_line = Paragraph::new(Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::Gray)),
        Span::styled(
            status.text().to_string(),
            Style::default()
                .fg(get_status_color(status))
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(status_line, chunks[0]);

    let keys_text = match state.input_mode {
        InputMode::Normal => "[R] Refresh | [/] Symbol | [Q] Quit",
        InputMode::Editing => "[Enter] Load | [Esc] Cancel",
    };
    let keys = Paragraph::new(keys_text)
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(keys, chunks[1]);
}
