//! Keyboard bindings.
//!
//! Keys are translated into [`InputEvent`]s without knowing which screen is
//! active; the session ignores inputs that mean nothing on the current one.
//! Arrow keys therefore submit both a movement and the matching menu
//! navigation.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::{CardinalDirection, MoveIntent};
use runtime::InputEvent;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Push these inputs to the session, in order.
    Submit(Vec<InputEvent>),
    /// No meaningful command was produced.
    None,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                directional(CardinalDirection::North, InputEvent::Up)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                directional(CardinalDirection::South, InputEvent::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                directional(CardinalDirection::West, InputEvent::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                directional(CardinalDirection::East, InputEvent::Right)
            }

            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char(' ') => {
                KeyAction::Submit(vec![InputEvent::Accept])
            }
            KeyCode::Esc => KeyAction::Submit(vec![InputEvent::Pause]),
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

fn directional(direction: CardinalDirection, navigation: InputEvent) -> KeyAction {
    KeyAction::Submit(vec![
        InputEvent::Move(MoveIntent::toward(direction)),
        navigation,
    ])
}
