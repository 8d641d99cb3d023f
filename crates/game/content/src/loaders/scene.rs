//! Scene loader.
//!
//! A scene file describes one exploration world: the grid is filled, walled
//! and painted in file order, then the entities are placed on top.

use std::path::Path;

use anyhow::{bail, ensure};
use game_core::{
    EncounterKey, EncounterOption, EncounterSpot, Exit, MemorySpot, Position, SceneId, Sign,
    Talker, TerrainKind, TileGrid, TileRect, WorldData,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One paint operation applied to the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
enum PaintOp {
    Rect {
        area: TileRect,
        terrain: TerrainKind,
        blocked: bool,
    },
    Cell {
        at: Position,
        terrain: TerrainKind,
        blocked: bool,
    },
    /// Horizontal and vertical road through `center`, each flanked by paths.
    Crossroad { center: Position },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EncounterRon {
    key: String,
    title: String,
    position: Position,
    intro: String,
    options: Vec<EncounterOption>,
}

/// Scene data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SceneRon {
    id: SceneId,
    label: String,
    dimensions: (u32, u32),
    #[serde(default)]
    fill: TerrainKind,
    #[serde(default)]
    border: Option<TerrainKind>,
    #[serde(default)]
    paint: Vec<PaintOp>,
    spawn: Position,
    #[serde(default)]
    talkers: Vec<Talker>,
    #[serde(default)]
    memories: Vec<MemorySpot>,
    #[serde(default)]
    encounters: Vec<EncounterRon>,
    #[serde(default)]
    signs: Vec<Sign>,
    #[serde(default)]
    exits: Vec<Exit>,
}

/// Loader for exploration scenes from RON files.
pub struct SceneLoader;

impl SceneLoader {
    /// Load a scene from a RON file.
    pub fn load(path: &Path) -> LoadResult<(SceneId, WorldData)> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scene {}: {:#}", path.display(), e))
    }

    /// Parse and validate a scene from RON text.
    pub fn parse(content: &str) -> LoadResult<(SceneId, WorldData)> {
        let data: SceneRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scene RON: {}", e))?;

        let (width, height) = data.dimensions;
        ensure!(width > 2 && height > 2, "scene grid {width}x{height} is too small");

        let mut grid = TileGrid::new(width, height, data.fill);
        if let Some(terrain) = data.border {
            grid.wall_border(terrain);
        }
        for op in &data.paint {
            paint(&mut grid, op);
        }

        let mut world = WorldData::new(data.label, grid, data.spawn);
        world.talkers = data.talkers;
        world.memories = data.memories;
        world.signs = data.signs;
        world.exits = data.exits;
        world.encounters = data
            .encounters
            .into_iter()
            .map(encounter_from_ron)
            .collect::<LoadResult<_>>()?;

        validate(&data.id, &world)?;
        Ok((data.id, world))
    }
}

fn paint(grid: &mut TileGrid, op: &PaintOp) {
    match *op {
        PaintOp::Rect {
            area,
            terrain,
            blocked,
        } => grid.fill_rect(area, terrain, blocked),
        PaintOp::Cell {
            at,
            terrain,
            blocked,
        } => grid.set(at, terrain, blocked),
        PaintOp::Crossroad { center } => {
            let (w, h) = (grid.width() as i32, grid.height() as i32);
            let span_x = (w - 3) as u32;
            let span_y = (h - 4) as u32;

            grid.fill_rect(TileRect::new(2, center.y, span_x, 1), TerrainKind::Road, false);
            grid.fill_rect(TileRect::new(2, center.y - 1, span_x, 1), TerrainKind::Path, false);
            grid.fill_rect(TileRect::new(2, center.y + 1, span_x, 1), TerrainKind::Path, false);

            let vertical = TerrainKind::RoadVertical;
            grid.fill_rect(TileRect::new(center.x, 2, 1, span_y), vertical, false);
            grid.fill_rect(TileRect::new(center.x - 1, 2, 1, span_y), TerrainKind::Path, false);
            grid.fill_rect(TileRect::new(center.x + 1, 2, 1, span_y), TerrainKind::Path, false);

            grid.set(center, TerrainKind::Intersection, false);
            grid.set(center.offset(-1, 0), TerrainKind::Road, false);
            grid.set(center.offset(1, 0), TerrainKind::Road, false);
        }
    }
}

fn encounter_from_ron(data: EncounterRon) -> LoadResult<EncounterSpot> {
    let Some(key) = EncounterKey::parse(&data.key) else {
        bail!("unknown encounter key '{}'", data.key);
    };
    Ok(EncounterSpot {
        key,
        title: data.title,
        position: data.position,
        intro: data.intro,
        options: data.options,
    })
}

fn validate(id: &SceneId, world: &WorldData) -> LoadResult<()> {
    let grid = &world.grid;
    ensure!(
        grid.is_passable(world.spawn),
        "scene {id}: spawn {} is blocked or out of bounds",
        world.spawn
    );
    for position in world.entity_positions() {
        ensure!(
            grid.contains(position),
            "scene {id}: entity at {position} is out of bounds"
        );
    }
    for encounter in &world.encounters {
        ensure!(
            !encounter.options.is_empty(),
            "scene {id}: encounter {} has no options",
            encounter.key
        );
    }
    for exit in &world.exits {
        let corner = Position::new(exit.area.x, exit.area.y);
        ensure!(
            grid.contains(corner) && exit.area.width > 0 && exit.area.height > 0,
            "scene {id}: exit to {} lies outside the grid",
            exit.to
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"(
        id: "TestScene",
        label: "Test",
        dimensions: (8, 6),
        border: Some(Border),
        paint: [
            Rect(area: (x: 2, y: 2, width: 2, height: 1), terrain: Water, blocked: true),
            Cell(at: (x: 3, y: 2), terrain: Path, blocked: false),
        ],
        spawn: (x: 1, y: 1),
        encounters: [
            (
                key: "extrañar",
                title: "Momento",
                position: (x: 5, y: 3),
                intro: "Hola",
                options: [(label: "Respirar", value: "respirar", bonus: 8, response: "Bien")],
            ),
        ],
        exits: [(area: (x: 6, y: 2, width: 1, height: 2), to: "OtherScene")],
    )"#;

    #[test]
    fn parses_and_paints_in_order() {
        let (id, world) = SceneLoader::parse(SMALL).unwrap();
        assert_eq!(id, SceneId::new("TestScene"));
        assert!(world.grid.is_blocked(Position::new(0, 0)));
        assert!(world.grid.is_blocked(Position::new(2, 2)));
        assert!(world.grid.is_passable(Position::new(3, 2)));
        assert_eq!(world.encounters[0].key, EncounterKey::Extranar);
        assert!(world.exits[0].requirements.is_empty());
    }

    #[test]
    fn rejects_blocked_spawn() {
        let bad = SMALL.replace("spawn: (x: 1, y: 1)", "spawn: (x: 0, y: 0)");
        let err = SceneLoader::parse(&bad).unwrap_err();
        assert!(err.to_string().contains("spawn"));
    }

    #[test]
    fn rejects_unknown_encounter_key() {
        let bad = SMALL.replace("\"extrañar\"", "\"miedo\"");
        assert!(SceneLoader::parse(&bad).is_err());
    }

    #[test]
    fn crossroad_matches_layout() {
        let mut grid = TileGrid::new(32, 18, TerrainKind::Grass);
        paint(
            &mut grid,
            &PaintOp::Crossroad {
                center: Position::new(15, 9),
            },
        );
        assert_eq!(grid.terrain(Position::new(2, 9)), Some(TerrainKind::Road));
        assert_eq!(grid.terrain(Position::new(30, 10)), Some(TerrainKind::Path));
        assert_eq!(grid.terrain(Position::new(31, 9)), Some(TerrainKind::Grass));
        assert_eq!(
            grid.terrain(Position::new(15, 15)),
            Some(TerrainKind::RoadVertical)
        );
        assert_eq!(grid.terrain(Position::new(15, 16)), Some(TerrainKind::Grass));
        assert_eq!(
            grid.terrain(Position::new(15, 9)),
            Some(TerrainKind::Intersection)
        );
        assert_eq!(grid.terrain(Position::new(14, 9)), Some(TerrainKind::Road));
    }
}
