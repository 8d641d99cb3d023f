//! Encounter choice menu.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use runtime::ChoiceMenu;

pub fn render(frame: &mut Frame, area: Rect, menu: &ChoiceMenu) {
    let items: Vec<ListItem> = menu
        .options()
        .iter()
        .map(|option| ListItem::new(option.label.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", menu.title())),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(menu.selected_index()));
    frame.render_stateful_widget(list, area, &mut state);
}
