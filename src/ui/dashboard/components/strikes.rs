//! Strike-level open interest table

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

/// Render one row per strike, in payload order.
pub fn render_strike_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header = Row::new(vec![
        Cell::from("Strike"),
        Cell::from("Call OI"),
        Cell::from("Put OI"),
    ])
    .style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = state
        .regions
        .strikes
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.strike.as_str()).style(Style::default().fg(Color::White)),
                Cell::from(row.call_oi.as_str()).style(Style::default().fg(Color::Green)),
                Cell::from(row.put_oi.as_str()).style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(34),
        Constraint::Percentage(33),
        Constraint::Percentage(33),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!("STRIKES ({})", state.regions.strikes.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(table, area);
}
