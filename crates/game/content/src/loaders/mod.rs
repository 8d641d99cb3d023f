//! Content loaders for reading game data from files.
//!
//! Every loader offers `load(path)` for files on disk and `parse(text)` for
//! embedded data, so the built-in story and a content directory go through
//! the same validation.

pub mod config;
pub mod factory;
pub mod scene;
pub mod story;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use scene::SceneLoader;
pub use story::StoryLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
