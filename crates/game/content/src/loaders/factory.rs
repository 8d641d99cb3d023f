//! Content factory for building the full content set.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::ensure;
use game_core::{GameConfig, SceneOracle};

use crate::catalog::{Content, SceneCatalog};
use crate::loaders::{ConfigLoader, LoadResult, SceneLoader, StoryLoader};
use crate::story::Story;

const BUILTIN_CONFIG: &str = include_str!("../../data/config.toml");
const BUILTIN_STORY: &str = include_str!("../../data/story.ron");
const BUILTIN_SCENES: [(&str, &str); 3] = [
    ("city", include_str!("../../data/scenes/city.ron")),
    ("campus", include_str!("../../data/scenes/campus.ron")),
    ("london", include_str!("../../data/scenes/london.ron")),
];

/// Content factory that loads all story content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── story.ron
/// └── scenes/
///     ├── city.ron
///     └── campus.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Builds the story shipped with the game.
    pub fn builtin() -> LoadResult<Content> {
        let config = ConfigLoader::parse(BUILTIN_CONFIG)?;
        let story = StoryLoader::parse(BUILTIN_STORY)?;
        let mut scenes = SceneCatalog::new();
        for (name, text) in BUILTIN_SCENES {
            let (id, world) = SceneLoader::parse(text)
                .map_err(|e| anyhow::anyhow!("Invalid built-in scene {}: {:#}", name, e))?;
            scenes.insert(id, world);
        }
        assemble(config, story, scenes)
    }

    /// Loads every content file under `data_dir`.
    pub fn from_dir(data_dir: impl Into<PathBuf>) -> LoadResult<Content> {
        Self::new(data_dir).load()
    }

    /// Loads config, story and all scenes.
    pub fn load(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let story = self.load_story()?;
        let scenes = self.load_scenes()?;
        assemble(config, story, scenes)
    }

    /// Load game configuration from `config.toml`, falling back to defaults
    /// when the file is absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the story from `story.ron`.
    pub fn load_story(&self) -> LoadResult<Story> {
        let path = self.data_dir.join("story.ron");
        StoryLoader::load(&path)
    }

    /// Load every `scenes/*.ron` file, in file name order.
    pub fn load_scenes(&self) -> LoadResult<SceneCatalog> {
        let dir = self.data_dir.join("scenes");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read scene directory {}: {}", dir.display(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut scenes = SceneCatalog::new();
        for path in paths {
            let (id, world) = SceneLoader::load(&path)?;
            tracing::debug!(scene = %id, path = %path.display(), "loaded scene");
            ensure!(
                scenes.insert(id.clone(), world).is_none(),
                "scene {} is defined twice",
                id
            );
        }
        Ok(scenes)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Cross-checks that every scene the story and exits point at exists, and
/// that the memories across all scenes fit in one collection.
fn assemble(config: GameConfig, story: Story, scenes: SceneCatalog) -> LoadResult<Content> {
    ensure!(
        scenes.is_exploration(&story.start_scene),
        "start scene {} has no scene file",
        story.start_scene
    );
    let mut memory_ids = HashSet::new();
    for id in scenes.ids() {
        let Some(world) = scenes.world(id) else {
            continue;
        };
        for memory in &world.memories {
            ensure!(
                memory_ids.insert(&memory.id),
                "scene {}: memory {} is defined twice",
                id,
                memory.id
            );
        }
        for exit in &world.exits {
            ensure!(
                exit.to == story.finale.scene || scenes.is_exploration(&exit.to),
                "scene {}: exit leads to unknown scene {}",
                id,
                exit.to
            );
        }
    }
    ensure!(
        memory_ids.len() <= GameConfig::MAX_MEMORIES,
        "content defines {} memories, at most {} can be collected",
        memory_ids.len(),
        GameConfig::MAX_MEMORIES
    );
    tracing::debug!(
        scenes = scenes.len(),
        memories = memory_ids.len(),
        "content assembled"
    );
    Ok(Content {
        config,
        story,
        scenes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn builtin_content_is_consistent() {
        let content = ContentFactory::builtin().unwrap();
        assert_eq!(content.scenes.len(), 3);
        assert_eq!(content.story.start_scene, "CityScene");
        assert_eq!(content.config, GameConfig::default());
    }
}
