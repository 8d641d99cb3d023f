//! Authoritative player progress representation.
//!
//! [`ProgressState`] is the single record of how far a play-through has come.
//! It is owned explicitly by the session and handed by reference to the
//! resolver, gate evaluator and objective generator. Progression changes go
//! through [`crate::engine::GameEngine`] so the invariants below hold after
//! every action:
//!
//! - `love_meter` stays within `0..=GameConfig::MAX_LOVE`
//! - `memories` has no duplicates and never exceeds `GameConfig::MAX_MEMORIES`
//! - `solved_encounters` has no duplicates (the key type is the closed set)
pub mod delta;
pub mod types;

pub use delta::ProgressDelta;
pub use types::{
    Character, EncounterKey, FlagName, MemoryId, Position, ProgressFlags, SceneId, TileRect,
};

use crate::config::GameConfig;

/// Mutable record of a play-through, persisted after every progression change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProgressState {
    /// Scene to resume into. Written before every scene handoff.
    pub current_scene: SceneId,
    /// Set once the finale has played; never cleared within a play-through.
    pub final_seen: bool,
    /// Progress score gating story advancement.
    pub love_meter: u8,
    pub selected_character: Option<Character>,
    /// Collected memories in pickup order.
    pub memories: Vec<MemoryId>,
    /// Resolved encounters in resolution order.
    pub solved_encounters: Vec<EncounterKey>,
    pub flags: ProgressFlags,
}

impl ProgressState {
    /// Creates the default state of a fresh play-through.
    pub fn new() -> Self {
        Self {
            current_scene: SceneId::title(),
            final_seen: false,
            love_meter: GameConfig::INITIAL_LOVE,
            selected_character: None,
            memories: Vec::new(),
            solved_encounters: Vec::new(),
            flags: ProgressFlags::default(),
        }
    }

    /// Overwrites every field with its default and returns the live instance.
    ///
    /// Callers that need continuity (the tutorial-seen flag) restore it on the
    /// returned reference.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Adds `bonus` to the love meter, saturating at the cap.
    ///
    /// Returns the amount actually applied.
    pub fn add_love(&mut self, bonus: u8) -> u8 {
        let before = self.love_meter;
        self.love_meter = before.saturating_add(bonus).min(GameConfig::MAX_LOVE);
        self.love_meter - before
    }

    pub fn has_memory(&self, id: &MemoryId) -> bool {
        self.memories.contains(id)
    }

    pub fn is_solved(&self, key: EncounterKey) -> bool {
        self.solved_encounters.contains(&key)
    }

    pub fn flag(&self, flag: FlagName) -> bool {
        self.flags.get(flag)
    }

    pub fn memory_count(&self) -> usize {
        self.memories.len()
    }

    pub fn encounter_count(&self) -> usize {
        self.solved_encounters.len()
    }

    /// Returns a description of the first violated invariant, if any.
    pub fn invariant_violation(&self) -> Option<&'static str> {
        if self.love_meter > GameConfig::MAX_LOVE {
            return Some("love meter above cap");
        }
        if self.memories.len() > GameConfig::MAX_MEMORIES {
            return Some("too many memories");
        }
        if has_duplicates(&self.memories) {
            return Some("duplicate memory");
        }
        if has_duplicates(&self.solved_encounters) {
            return Some("duplicate encounter");
        }
        None
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| items[..i].contains(item))
}
