//! Typewriter dialog panel.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use runtime::DialogBox;

use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, dialog: &DialogBox) {
    let speaker = dialog
        .current()
        .map(|line| line.speaker.as_str())
        .unwrap_or_default();

    let mut lines = vec![Line::from(dialog.visible_text())];
    if dialog.is_line_complete() {
        let hint = if dialog.remaining() > 0 { "▼" } else { "■" };
        lines.push(Line::from(Span::styled(hint, theme::prompt())));
    }

    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        format!(" {speaker} "),
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    ));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
