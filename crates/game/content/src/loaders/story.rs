//! Story loader.

use std::path::Path;

use anyhow::ensure;

use crate::loaders::{LoadResult, read_file};
use crate::story::Story;

/// Loader for the story definition from RON files.
pub struct StoryLoader;

impl StoryLoader {
    /// Load the story from a RON file.
    pub fn load(path: &Path) -> LoadResult<Story> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid story {}: {:#}", path.display(), e))
    }

    /// Parse and validate a story from RON text.
    pub fn parse(content: &str) -> LoadResult<Story> {
        let story: Story = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse story RON: {}", e))?;

        let options = &story.character_select.options;
        ensure!(!options.is_empty(), "character select has no options");
        ensure!(
            options.iter().any(|option| option.locked.is_none()),
            "every character option is locked"
        );
        ensure!(!story.finale.dialog.is_empty(), "finale dialog is empty");

        Ok(story)
    }
}
