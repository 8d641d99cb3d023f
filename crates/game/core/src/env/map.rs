use std::collections::HashSet;

use crate::state::{Position, TileRect};

/// Canonical terrain classes for scene tiles.
///
/// Terrain only drives presentation; passability is tracked separately in the
/// grid's blocked set so the same terrain can be walkable in one scene and a
/// wall in another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Grass,
    Path,
    Water,
    Brick,
    Floor,
    Bus,
    Window,
    Door,
    Road,
    RoadVertical,
    Intersection,
    Border,
}

/// Static tile layout of one scene: terrain per cell plus the blocked set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<TerrainKind>,
    blocked: HashSet<Position>,
}

impl TileGrid {
    /// Creates a grid filled with `fill` and no blocked cells.
    pub fn new(width: u32, height: u32, fill: TerrainKind) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; (width * height) as usize],
            blocked: HashSet::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.index(position).map(|i| self.tiles[i])
    }

    /// Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, position: Position) -> bool {
        !self.contains(position) || self.blocked.contains(&position)
    }

    pub fn is_passable(&self, position: Position) -> bool {
        !self.is_blocked(position)
    }

    /// Paints one cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, position: Position, terrain: TerrainKind, blocked: bool) {
        let Some(index) = self.index(position) else {
            return;
        };
        self.tiles[index] = terrain;
        if blocked {
            self.blocked.insert(position);
        } else {
            self.blocked.remove(&position);
        }
    }

    /// Paints every cell of `rect`.
    pub fn fill_rect(&mut self, rect: TileRect, terrain: TerrainKind, blocked: bool) {
        for y in rect.y..rect.y + rect.height as i32 {
            for x in rect.x..rect.x + rect.width as i32 {
                self.set(Position::new(x, y), terrain, blocked);
            }
        }
    }

    /// Paints the outer ring of the grid as blocked `terrain`.
    pub fn wall_border(&mut self, terrain: TerrainKind) {
        let (w, h) = (self.width as i32, self.height as i32);
        for x in 0..w {
            self.set(Position::new(x, 0), terrain, true);
            self.set(Position::new(x, h - 1), terrain, true);
        }
        for y in 0..h {
            self.set(Position::new(0, y), terrain, true);
            self.set(Position::new(w - 1, y), terrain, true);
        }
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_blocks_edges_only() {
        let mut grid = TileGrid::new(5, 4, TerrainKind::Grass);
        grid.wall_border(TerrainKind::Border);
        assert!(grid.is_blocked(Position::new(0, 2)));
        assert!(grid.is_blocked(Position::new(4, 3)));
        assert!(grid.is_passable(Position::new(2, 2)));
        assert_eq!(grid.terrain(Position::new(0, 0)), Some(TerrainKind::Border));
        assert_eq!(grid.blocked_count(), 14);
    }

    #[test]
    fn later_paint_can_unblock() {
        let mut grid = TileGrid::new(6, 6, TerrainKind::Grass);
        grid.fill_rect(TileRect::new(1, 1, 3, 3), TerrainKind::Water, true);
        assert!(grid.is_blocked(Position::new(2, 2)));
        grid.set(Position::new(2, 2), TerrainKind::Path, false);
        assert!(grid.is_passable(Position::new(2, 2)));
        assert_eq!(grid.terrain(Position::new(2, 2)), Some(TerrainKind::Path));
    }

    #[test]
    fn outside_grid_is_blocked() {
        let grid = TileGrid::new(3, 3, TerrainKind::Floor);
        assert!(grid.is_blocked(Position::new(-1, 0)));
        assert!(grid.is_blocked(Position::new(0, 3)));
        assert_eq!(grid.terrain(Position::new(3, 0)), None);
    }
}
