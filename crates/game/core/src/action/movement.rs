use crate::env::TileGrid;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("no direction held")]
    Idle,

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is blocked")]
    Blocked { destination: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Idle => ErrorSeverity::Validation,
            Self::OutOfBounds { .. } | Self::Blocked { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Idle => "MOVE_IDLE",
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::Blocked { .. } => "MOVE_BLOCKED",
        }
    }
}

/// Grid direction; rows grow southwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }
}

/// Held directions collapsed to at most one horizontal and one vertical step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveIntent {
    pub horizontal: Option<CardinalDirection>,
    pub vertical: Option<CardinalDirection>,
}

impl MoveIntent {
    /// Left beats right and up beats down when both are held.
    pub fn from_axes(left: bool, right: bool, up: bool, down: bool) -> Self {
        let horizontal = if left {
            Some(CardinalDirection::West)
        } else if right {
            Some(CardinalDirection::East)
        } else {
            None
        };
        let vertical = if up {
            Some(CardinalDirection::North)
        } else if down {
            Some(CardinalDirection::South)
        } else {
            None
        };
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn toward(direction: CardinalDirection) -> Self {
        match direction {
            CardinalDirection::East | CardinalDirection::West => Self {
                horizontal: Some(direction),
                vertical: None,
            },
            CardinalDirection::North | CardinalDirection::South => Self {
                horizontal: None,
                vertical: Some(direction),
            },
        }
    }

    pub fn is_idle(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }
}

fn try_step(
    grid: &TileGrid,
    from: Position,
    direction: CardinalDirection,
) -> Result<Position, MoveError> {
    let (dx, dy) = direction.delta();
    let destination = from.offset(dx, dy);
    if !grid.contains(destination) {
        return Err(MoveError::OutOfBounds { destination });
    }
    if grid.is_blocked(destination) {
        return Err(MoveError::Blocked { destination });
    }
    Ok(destination)
}

/// Moves one tile along each held axis, horizontal first.
///
/// Each axis is checked on its own so the player slides along walls. Fails
/// only when neither axis could move, reporting the first rejection.
pub fn step(grid: &TileGrid, from: Position, intent: MoveIntent) -> Result<Position, MoveError> {
    if intent.is_idle() {
        return Err(MoveError::Idle);
    }

    let mut position = from;
    let mut first_error = None;

    for direction in [intent.horizontal, intent.vertical].into_iter().flatten() {
        match try_step(grid, position, direction) {
            Ok(next) => position = next,
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }

    match first_error {
        Some(error) if position == from => Err(error),
        _ => Ok(position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TerrainKind;

    fn walled(width: u32, height: u32) -> TileGrid {
        let mut grid = TileGrid::new(width, height, TerrainKind::Grass);
        grid.wall_border(TerrainKind::Border);
        grid
    }

    #[test]
    fn opposite_keys_resolve_to_left_and_up() {
        let intent = MoveIntent::from_axes(true, true, true, true);
        assert_eq!(intent.horizontal, Some(CardinalDirection::West));
        assert_eq!(intent.vertical, Some(CardinalDirection::North));
        assert!(MoveIntent::from_axes(false, false, false, false).is_idle());
    }

    #[test]
    fn slides_along_walls() {
        let grid = walled(6, 6);
        let intent = MoveIntent::from_axes(true, false, false, true);
        assert_eq!(
            step(&grid, Position::new(1, 2), intent),
            Ok(Position::new(1, 3))
        );
        assert_eq!(
            step(&grid, Position::new(2, 2), intent),
            Ok(Position::new(1, 3))
        );
    }

    #[test]
    fn blocked_on_every_axis_reports_first_error() {
        let grid = walled(4, 4);
        let intent = MoveIntent::from_axes(true, false, true, false);
        assert_eq!(
            step(&grid, Position::new(1, 1), intent),
            Err(MoveError::Blocked {
                destination: Position::new(0, 1)
            })
        );
        assert_eq!(
            step(&grid, Position::new(1, 1), MoveIntent::default()),
            Err(MoveError::Idle)
        );
    }

    #[test]
    fn off_map_is_out_of_bounds() {
        let grid = TileGrid::new(3, 3, TerrainKind::Path);
        assert_eq!(
            step(
                &grid,
                Position::new(2, 1),
                MoveIntent::toward(CardinalDirection::East)
            ),
            Err(MoveError::OutOfBounds {
                destination: Position::new(3, 1)
            })
        );
    }
}
