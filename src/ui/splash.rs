//! Start-up screen shown while the initial load is in flight.

use crate::ui::dashboard::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
   ██████╗  ██╗    ██████╗   █████╗  ███████╗ ██╗  ██╗
  ██╔═══██╗ ██║    ██╔══██╗ ██╔══██╗ ██╔════╝ ██║  ██║
  ██║   ██║ ██║    ██║  ██║ ███████║ ███████╗ ███████║
  ██║   ██║ ██║    ██║  ██║ ██╔══██║ ╚════██║ ██╔══██║
  ╚██████╔╝ ██║    ██████╔╝ ██║  ██║ ███████║ ██║  ██║
   ╚═════╝  ╚═╝    ╚═════╝  ╚═╝  ╚═╝ ╚══════╝ ╚═╝  ╚═╝
"#;

/// Logo, what is being loaded and from where, and the status of the first cycle.
pub fn render_splash(f: &mut Frame, state: &DashboardState) {
    let logo_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| Line::styled(line, logo_style))
        .collect();

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!(
            "{} from {}  |  refresh every {}s",
            state.symbol,
            state.environment.api_url(),
            state.refresh_interval.as_secs()
        ),
        Style::default().fg(Color::LightBlue),
    ));
    lines.push(Line::styled(
        state.regions.status.text().to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ));

    let [area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
