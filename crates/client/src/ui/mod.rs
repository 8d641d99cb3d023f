//! Frame rendering with Ratatui.
//!
//! Every frame is drawn from the session as it is; nothing here mutates game
//! state. Exploration gets the full panel stack (HUD, map, dialog or menu,
//! message log and key hints); the other screens are centred text.
pub mod screens;
pub mod theme;
pub mod widgets;

use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use runtime::{AudioSink, Exploration, Screen, Session, StateRepository};

use crate::config::UiConfig;
use crate::message::MessageLog;
use crate::terminal::Tui;

pub fn render<R, A>(
    terminal: &mut Tui,
    session: &Session<R, A>,
    messages: &MessageLog,
    config: &UiConfig,
) -> Result<()>
where
    R: StateRepository,
    A: AudioSink,
{
    terminal.draw(|frame| render_frame(frame, session, messages, config))?;
    Ok(())
}

fn render_frame<R, A>(
    frame: &mut Frame,
    session: &Session<R, A>,
    messages: &MessageLog,
    config: &UiConfig,
) where
    R: StateRepository,
    A: AudioSink,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());
    let story = &session.content().story;

    match session.screen() {
        Screen::Title => screens::title(frame, chunks[0], story),
        Screen::Tutorial => screens::tutorial(frame, chunks[0], story),
        Screen::CharacterSelect(select) => {
            screens::character_select(frame, chunks[0], story, select)
        }
        Screen::Exploration(exploration) => {
            render_exploration(frame, chunks[0], session, exploration, messages, config)
        }
        Screen::Finale(finale) => screens::finale(frame, chunks[0], story, finale),
    }
    widgets::footer::render(frame, chunks[1], session.screen(), session.is_paused());

    if session.is_paused() {
        let area = frame.area();
        screens::pause(frame, area, story);
    }
}

fn render_exploration<R, A>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<R, A>,
    exploration: &Exploration,
    messages: &MessageLog,
    config: &UiConfig,
) where
    R: StateRepository,
    A: AudioSink,
{
    let overlay_height = match (&exploration.menu, &exploration.dialog) {
        (Some(menu), _) => u16::try_from(menu.options().len())
            .unwrap_or(u16::MAX)
            .saturating_add(2),
        (None, Some(_)) => 5,
        (None, None) => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(overlay_height),
            Constraint::Length(config.message_panel_height),
        ])
        .split(area);

    if let Some(hud) = session.hud() {
        widgets::hud::render(frame, chunks[0], &hud);
    }
    if let Some(world) = session.world() {
        widgets::map::render(frame, chunks[1], world, exploration.player, session.state());
    }
    if let Some(menu) = &exploration.menu {
        widgets::menu::render(frame, chunks[2], menu);
    } else if let Some(dialog) = &exploration.dialog {
        widgets::dialog::render(frame, chunks[2], dialog);
    }
    widgets::messages::render(frame, chunks[3], messages);
}
