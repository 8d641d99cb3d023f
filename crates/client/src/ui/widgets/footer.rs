//! Footer widget displaying context-sensitive key bindings.
use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};
use runtime::Screen;

use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, screen: &Screen, paused: bool) {
    let text = if paused {
        "[Esc/Enter] Continuar | [q] Salir"
    } else {
        match screen {
            Screen::Title | Screen::Tutorial => "[Enter/E] Empezar | [q] Salir",
            Screen::CharacterSelect(_) => "[←/→] Elegir | [Enter/E] Confirmar | [q] Salir",
            Screen::Exploration(exploration) if exploration.menu.is_some() => {
                "[↑/↓] Elegir | [Enter/E] Confirmar"
            }
            Screen::Exploration(exploration) if exploration.dialog.is_some() => {
                "[Enter/E] Continuar"
            }
            Screen::Exploration(_) => {
                "[WASD/Flechas] Moverse | [E] Interactuar | [Esc] Pausa | [q] Salir"
            }
            Screen::Finale(_) => "[Enter/E] Continuar | [Esc] Pausa | [q] Salir",
        }
    };
    frame.render_widget(Paragraph::new(Line::styled(text, theme::dim())), area);
}
