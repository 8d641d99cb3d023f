//! Read-only scene content.
//!
//! Worlds are authored as data and handed to the engine through the
//! [`SceneOracle`] trait so the rules never depend on a concrete content
//! source.
mod map;
mod phrases;
mod world;

pub use map::{TerrainKind, TileGrid};
pub use phrases::Phrasebook;
pub use world::{
    EncounterOption, EncounterSpot, Exit, ExitRequirements, MemorySpot, Sign, Talker,
    TalkerVariant, WorldData,
};

use crate::state::SceneId;

/// Provides the static world of each exploration scene.
pub trait SceneOracle: Send + Sync {
    /// Returns the world for `scene`, or `None` for non-exploration scenes.
    fn world(&self, scene: &SceneId) -> Option<&WorldData>;

    /// Returns true when `scene` is an exploration scene.
    fn is_exploration(&self, scene: &SceneId) -> bool {
        self.world(scene).is_some()
    }
}
