pub mod common;
pub mod ids;
pub mod progress;

// Re-export common types
pub use common::{Position, TileRect};

// Re-export identifiers
pub use ids::{MemoryId, SceneId};

// Re-export progress vocabulary
pub use progress::{Character, EncounterKey, FlagName, ProgressFlags};
