//! Love meter, memory counter and current objective.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use runtime::HudView;

use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, hud: &HudView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" AMOR "))
        .gauge_style(theme::love_bar())
        .ratio(hud.love_ratio())
        .label(format!("{}%", hud.love));
    frame.render_widget(gauge, chunks[0]);

    let line = Line::from(vec![
        Span::styled(
            hud.memories_text(),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(hud.objective.as_str()),
    ]);
    let status = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", hud.label)),
    );
    frame.render_widget(status, chunks[1]);
}
