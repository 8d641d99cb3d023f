//! Data-driven story content and loaders.
//!
//! This crate houses the story's static content and provides loaders for
//! RON/TOML data files:
//! - Exploration scenes (layout, entities, exits) via RON
//! - Story screens, finale and letter via RON
//! - Tunable game configuration via TOML
//!
//! Content is consumed by the runtime through [`game_core::SceneOracle`] and
//! never appears in the save record. The shipped story is embedded in the
//! binary and available through [`ContentFactory::builtin`].

pub mod catalog;
pub mod story;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Content, SceneCatalog};
pub use story::{
    CharacterOption, CharacterSelectScreen, FinalLetter, Finale, PauseScreen, Story,
    TitleScreen, TutorialCard, TutorialScreen,
};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, SceneLoader, StoryLoader};
