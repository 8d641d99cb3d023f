//! Glyphs and colours for the terminal frontend.
use game_core::{Character, TerrainKind};
use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// What occupies a map cell, in drawing priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant<'a> {
    Player(Option<Character>),
    Talker { name: &'a str },
    Encounter { solved: bool },
    Memory { collected: bool },
    Sign,
    Exit,
}

pub fn terrain(terrain: TerrainKind) -> (char, Style) {
    let (glyph, color) = match terrain {
        TerrainKind::Grass => ('"', Color::Green),
        TerrainKind::Path => ('.', Color::Yellow),
        TerrainKind::Water => ('~', Color::Blue),
        TerrainKind::Brick => ('#', Color::Red),
        TerrainKind::Floor => ('.', Color::Gray),
        TerrainKind::Bus => ('=', Color::LightYellow),
        TerrainKind::Window => (':', Color::LightBlue),
        TerrainKind::Door => ('+', Color::Yellow),
        TerrainKind::Road => ('-', Color::DarkGray),
        TerrainKind::RoadVertical => ('|', Color::DarkGray),
        TerrainKind::Intersection => ('+', Color::DarkGray),
        TerrainKind::Border => ('█', Color::Gray),
    };
    (glyph, Style::default().fg(color))
}

pub fn occupant(occupant: Occupant<'_>) -> (char, Style) {
    match occupant {
        Occupant::Player(character) => {
            let color = match character {
                Some(Character::Her) => Color::LightMagenta,
                _ => Color::LightCyan,
            };
            ('@', Style::default().fg(color).add_modifier(Modifier::BOLD))
        }
        Occupant::Talker { name } => {
            let glyph = name
                .chars()
                .next()
                .map_or('N', |c| c.to_uppercase().next().unwrap_or(c));
            (glyph, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        }
        Occupant::Encounter { solved: false } => (
            '!',
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        ),
        Occupant::Encounter { solved: true } => ('!', Style::default().fg(Color::DarkGray)),
        Occupant::Memory { collected: false } => ('*', Style::default().fg(Color::LightMagenta)),
        Occupant::Memory { collected: true } => ('*', Style::default().fg(Color::DarkGray)),
        Occupant::Sign => ('?', Style::default().fg(Color::Yellow)),
        Occupant::Exit => ('>', Style::default().fg(Color::LightGreen)),
    }
}

pub fn message(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::default(),
        MessageLevel::Warning => Style::default().fg(Color::Yellow),
    }
}

pub fn heading() -> Style {
    Style::default()
        .fg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD)
}

pub fn prompt() -> Style {
    Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::SLOW_BLINK)
}

pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn love_bar() -> Style {
    Style::default().fg(Color::LightRed).bg(Color::Black)
}
