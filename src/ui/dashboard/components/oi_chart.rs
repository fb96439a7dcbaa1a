//! Open interest overview
//!
//! Call vs put totals for the strike window as a two-bar chart, with the
//! call and put walls underneath.

use super::super::state::DashboardState;
use super::super::utils::format_oi;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

pub fn render_oi_overview(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("OI OVERVIEW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(overview) = &state.regions.overview else {
        f.render_widget(
            Paragraph::new("No data yet").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(2)])
        .split(inner);

    let bars = [
        Bar::default()
            .label(Line::from("CALL"))
            .value(overview.total_call_oi.max(0.0) as u64)
            .text_value(format_oi(overview.total_call_oi))
            .style(Style::default().fg(Color::Green)),
        Bar::default()
            .label(Line::from("PUT"))
            .value(overview.total_put_oi.max(0.0) as u64)
            .text_value(format_oi(overview.total_put_oi))
            .style(Style::default().fg(Color::Red)),
    ];
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(3)
        .value_style(
            Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(chart, chunks[0]);

    let wall = |strike: Option<f64>| strike.map_or_else(|| "-".to_string(), |s| s.to_string());
    let pcr = overview
        .window_pcr()
        .map_or_else(|| "-".to_string(), |p| format!("{:.2}", p));
    let lines = vec![
        Line::from(vec![
            Span::styled("Call wall: ", Style::default().fg(Color::Gray)),
            Span::styled(wall(overview.call_wall), Style::default().fg(Color::Green)),
            Span::styled("  Put wall: ", Style::default().fg(Color::Gray)),
            Span::styled(wall(overview.put_wall), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::styled("Window PCR: ", Style::default().fg(Color::Gray)),
            Span::styled(pcr, Style::default().fg(Color::LightYellow)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), chunks[1]);
}
