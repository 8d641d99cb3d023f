//! Messages widget displaying recent game events.
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::message::{MessageEntry, MessageLog};
use crate::ui::theme;

/// Render the message log panel, newest entry at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = usize::from(area.height.saturating_sub(2));
    let mut items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(format_message(entry)).style(theme::message(entry.level)))
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < visible {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Registro "))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format an entry with its session time in seconds.
fn format_message(entry: &MessageEntry) -> String {
    match entry.timestamp {
        Some(ms) => format!("[{:>4}s] {}", ms / 1000, entry.text),
        None => entry.text.clone(),
    }
}
