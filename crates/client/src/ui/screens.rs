//! Full-screen views outside exploration: title, tutorial, character
//! selection, the finale and the pause overlay.
use game_content::Story;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use runtime::{CharacterSelect, FinaleView};

use crate::ui::{theme, widgets};

pub fn title(frame: &mut Frame, area: Rect, story: &Story) {
    let title = &story.title;
    let lines = vec![
        Line::styled(title.heading.as_str(), theme::heading()),
        Line::from(title.subtitle.as_str()),
        Line::default(),
        Line::styled(title.date.as_str(), theme::dim()),
        Line::from(title.dedication.as_str()),
        Line::default(),
        Line::styled(title.prompt.as_str(), theme::prompt()),
        Line::default(),
        Line::styled(title.controls.as_str(), theme::dim()),
    ];
    centered_paragraph(frame, area, lines);
}

pub fn tutorial(frame: &mut Frame, area: Rect, story: &Story) {
    let tutorial = &story.tutorial;
    let mut lines = vec![
        Line::styled(tutorial.heading.as_str(), theme::heading()),
        Line::default(),
    ];
    for card in &tutorial.cards {
        lines.push(Line::styled(
            card.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.extend(card.lines.iter().map(|text| Line::from(text.as_str())));
        lines.push(Line::default());
    }
    lines.push(Line::from(tutorial.objective.as_str()));
    lines.push(Line::styled(tutorial.tip.as_str(), theme::dim()));
    lines.push(Line::default());
    lines.push(Line::styled(tutorial.prompt.as_str(), theme::prompt()));
    centered_paragraph(frame, area, lines);
}

pub fn character_select(frame: &mut Frame, area: Rect, story: &Story, select: &CharacterSelect) {
    let screen = &story.character_select;

    let mut cards = Vec::new();
    for (index, option) in screen.options.iter().enumerate() {
        let style = match (index == select.selected, option.locked.is_some()) {
            (true, _) => Style::default()
                .fg(Color::Black)
                .bg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            (false, true) => theme::dim(),
            (false, false) => Style::default(),
        };
        if index > 0 {
            cards.push(Span::raw("    "));
        }
        cards.push(Span::styled(format!("[ {} ]", option.label), style));
    }

    let mut lines = vec![
        Line::styled(screen.heading.as_str(), theme::heading()),
        Line::default(),
        Line::from(cards),
        Line::default(),
    ];
    match &select.warning {
        Some(warning) => lines.push(Line::styled(
            warning.as_str(),
            Style::default().fg(Color::Yellow),
        )),
        None => lines.push(Line::default()),
    }
    lines.push(Line::default());
    lines.push(Line::styled(screen.hint.as_str(), theme::dim()));
    centered_paragraph(frame, area, lines);
}

pub fn finale(frame: &mut Frame, area: Rect, story: &Story, finale: &FinaleView) {
    if let Some(letter) = &finale.letter {
        let text = &story.letter;
        let mut lines = vec![
            Line::styled(text.recipient.as_str(), theme::heading()),
            Line::default(),
        ];
        lines.extend(text.message.lines().map(Line::from));
        lines.push(Line::default());
        lines.push(Line::styled(
            letter.joke.as_str(),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::default());
        lines.push(Line::styled(
            text.secret_code.as_str(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ));
        centered_paragraph(frame, area, lines);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    let mut lines = vec![Line::styled(story.finale.heading.as_str(), theme::heading())];
    if finale.ready_for_letter {
        lines.push(Line::default());
        lines.push(Line::styled("✉", theme::prompt()));
    }
    centered_paragraph(frame, chunks[0], lines);

    if let Some(dialog) = &finale.dialog {
        widgets::dialog::render(frame, chunks[1], dialog);
    }
}

pub fn pause(frame: &mut Frame, area: Rect, story: &Story) {
    let overlay = centered_rect(area, 40, 7);
    frame.render_widget(Clear, overlay);
    let lines = vec![
        Line::styled(story.pause.heading.as_str(), theme::heading()),
        Line::default(),
        Line::from(story.pause.hint.as_str()),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, overlay);
}

fn centered_paragraph(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let top = area.height.saturating_sub(height) / 2;
    let body = Rect {
        y: area.y + top,
        height: height.min(area.height),
        ..area
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
