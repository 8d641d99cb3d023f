use std::collections::BTreeMap;

use game_core::{GameConfig, SceneId, SceneOracle, WorldData};

use crate::story::Story;

/// Exploration worlds keyed by scene id.
#[derive(Clone, Debug, Default)]
pub struct SceneCatalog {
    scenes: BTreeMap<SceneId, WorldData>,
}

impl SceneCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `world` under `id`, returning the world it replaced.
    pub fn insert(&mut self, id: SceneId, world: WorldData) -> Option<WorldData> {
        self.scenes.insert(id, world)
    }

    pub fn ids(&self) -> impl Iterator<Item = &SceneId> {
        self.scenes.keys()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl SceneOracle for SceneCatalog {
    fn world(&self, scene: &SceneId) -> Option<&WorldData> {
        self.scenes.get(scene)
    }
}

/// Complete content set a session runs on.
#[derive(Clone, Debug)]
pub struct Content {
    pub config: GameConfig,
    pub story: Story,
    pub scenes: SceneCatalog,
}
