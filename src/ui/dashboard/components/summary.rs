//! Symbol field and summary line

use super::super::state::{DashboardState, InputMode};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Render the symbol input next to the summary line.
pub fn render_summary_bar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Fill(1)])
        .split(area);

    render_symbol_input(f, chunks[0], state);
    render_summary(f, chunks[1], state);
}

fn render_symbol_input(f: &mut Frame, area: Rect, state: &DashboardState) {
    let (text, border_color) = match state.input_mode {
        InputMode::Editing => (format!("{}▏", state.symbol_draft), Color::LightYellow),
        InputMode::Normal => (state.symbol.clone(), Color::Cyan),
    };

    let input = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .title("SYMBOL")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);
}

fn render_summary(f: &mut Frame, area: Rect, state: &DashboardState) {
    let line = match &state.regions.summary {
        Some(summary) => {
            let mut spans = Vec::new();
            for (i, (label, value)) in summary.fields().into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("   "));
                }
                spans.push(Span::styled(
                    format!("{}: ", label),
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    value.to_string(),
                    Style::default().fg(Color::White),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled(
            "No data yet",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let summary = Paragraph::new(line)
        .block(
            Block::default()
                .title("SUMMARY")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(summary, area);
}
