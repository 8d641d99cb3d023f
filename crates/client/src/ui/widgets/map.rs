//! Tile map with the player and every entity of the scene.
use game_core::{Position, ProgressState, WorldData};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::{self, Occupant};

/// Render the scene grid, scrolled so the player stays visible.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    world: &WorldData,
    player: Position,
    state: &ProgressState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", world.label));
    let inner = block.inner(area);

    let width = i32::try_from(world.grid.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(world.grid.height()).unwrap_or(i32::MAX);

    // Two columns per tile keeps cells roughly square when there is room.
    let cell_width: u16 = if u32::from(inner.width) >= world.grid.width() * 2 {
        2
    } else {
        1
    };
    let visible_cols = i32::from(inner.width / cell_width);
    let visible_rows = i32::from(inner.height);

    let left = viewport_start(player.x, width, visible_cols);
    let top = viewport_start(player.y, height, visible_rows);

    let mut rows = Vec::new();
    for y in top..(top + visible_rows).min(height) {
        let spans: Vec<Span> = (left..(left + visible_cols).min(width))
            .map(|x| {
                let position = Position::new(x, y);
                let (glyph, style) = match occupant_at(world, player, state, position) {
                    Some(occupant) => theme::occupant(occupant),
                    None => world
                        .grid
                        .terrain(position)
                        .map_or((' ', theme::dim()), theme::terrain),
                };
                let text = if cell_width == 2 {
                    format!("{glyph} ")
                } else {
                    glyph.to_string()
                };
                Span::styled(text, style)
            })
            .collect();
        rows.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(rows).block(block), area);
}

fn occupant_at<'a>(
    world: &'a WorldData,
    player: Position,
    state: &ProgressState,
    position: Position,
) -> Option<Occupant<'a>> {
    if position == player {
        return Some(Occupant::Player(state.selected_character));
    }
    if let Some(talker) = world.talkers.iter().find(|t| t.position == position) {
        return Some(Occupant::Talker { name: &talker.name });
    }
    if let Some(spot) = world.encounters.iter().find(|e| e.position == position) {
        return Some(Occupant::Encounter {
            solved: state.is_solved(spot.key),
        });
    }
    if let Some(spot) = world.memories.iter().find(|m| m.position == position) {
        return Some(Occupant::Memory {
            collected: state.has_memory(&spot.id),
        });
    }
    if world.signs.iter().any(|s| s.position == position) {
        return Some(Occupant::Sign);
    }
    world.exit_at(position).map(|_| Occupant::Exit)
}

/// First visible coordinate along one axis, centring `focus` when the map is
/// larger than the viewport.
fn viewport_start(focus: i32, len: i32, visible: i32) -> i32 {
    if visible <= 0 || len <= visible {
        return 0;
    }
    (focus - visible / 2).clamp(0, len - visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_keeps_focus_visible() {
        assert_eq!(viewport_start(3, 10, 20), 0);
        assert_eq!(viewport_start(1, 40, 10), 0);
        assert_eq!(viewport_start(20, 40, 10), 15);
        assert_eq!(viewport_start(39, 40, 10), 30);
    }
}
