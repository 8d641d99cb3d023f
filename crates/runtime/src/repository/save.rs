//! Save slot bound to a [`StateRepository`].
//!
//! The stored record is JSON with camelCase field names. Loading never
//! fails: a missing or unreadable record yields a fresh play-through, and a
//! readable one is merged field by field over the defaults so that a single
//! malformed field cannot poison the rest of the save.
use serde_json::{Map, Value};

use game_core::{
    Character, EncounterKey, FlagName, GameConfig, MemoryId, ProgressState, SceneId,
};

use crate::repository::{Result, StateRepository};

/// Storage key of the progress record.
pub const SAVE_KEY: &str = "pixel-love-adventure-save-v2";

/// Loads and persists the progress record under [`SAVE_KEY`].
pub struct SaveService<R> {
    repo: R,
}

impl<R: StateRepository> SaveService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns the saved progress, or defaults when nothing usable is stored.
    pub fn load(&self) -> ProgressState {
        match self.repo.get(SAVE_KEY) {
            Ok(Some(raw)) => decode_save(&raw),
            Ok(None) => {
                tracing::debug!("No save found, starting fresh");
                ProgressState::new()
            }
            Err(err) => {
                tracing::warn!("Failed to read save, starting fresh: {}", err);
                ProgressState::new()
            }
        }
    }

    /// Overwrites the saved record with `state`.
    pub fn persist(&self, state: &ProgressState) -> Result<()> {
        let raw = encode_save(state)?;
        self.repo.set(SAVE_KEY, &raw)?;
        tracing::debug!(
            scene = %state.current_scene,
            love = state.love_meter,
            memories = state.memory_count(),
            "Persisted progress"
        );
        Ok(())
    }

    /// Deletes the saved record.
    pub fn clear(&self) -> Result<()> {
        self.repo.remove(SAVE_KEY)
    }
}

/// Serializes `state` to the stored JSON form.
pub fn encode_save(state: &ProgressState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Decodes a stored record, falling back to defaults field by field.
///
/// - unparsable text or a non-object root yields full defaults
/// - `memories` keeps unique strings, truncated to `MAX_MEMORIES`
/// - `solvedEncounters` keeps unique known keys
/// - `flags` merges boolean entries over the defaults
/// - `loveMeter` is clamped to `0..=MAX_LOVE`
/// - any other field of the wrong type keeps its default
pub fn decode_save(raw: &str) -> ProgressState {
    let root = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(root)) => root,
        Ok(_) => {
            tracing::warn!("Save record is not an object, starting fresh");
            return ProgressState::new();
        }
        Err(err) => {
            tracing::warn!("Save record is not valid JSON, starting fresh: {}", err);
            return ProgressState::new();
        }
    };

    let mut state = ProgressState::new();
    let mut discarded = Vec::new();

    match root.get("currentScene") {
        Some(Value::String(scene)) => state.current_scene = SceneId::new(scene.as_str()),
        Some(_) => discarded.push("currentScene"),
        None => {}
    }

    match root.get("finalSeen") {
        Some(Value::Bool(seen)) => state.final_seen = *seen,
        Some(_) => discarded.push("finalSeen"),
        None => {}
    }

    match root.get("loveMeter").and_then(Value::as_f64) {
        Some(love) => state.love_meter = clamp_love(love),
        None if root.contains_key("loveMeter") => discarded.push("loveMeter"),
        None => {}
    }

    match root.get("selectedCharacter") {
        Some(Value::Null) | None => {}
        Some(Value::String(raw)) => match raw.parse::<Character>() {
            Ok(character) => state.selected_character = Some(character),
            Err(_) => discarded.push("selectedCharacter"),
        },
        Some(_) => discarded.push("selectedCharacter"),
    }

    match root.get("memories") {
        Some(Value::Array(items)) => state.memories = decode_memories(items),
        Some(_) => discarded.push("memories"),
        None => {}
    }

    match root.get("solvedEncounters") {
        Some(Value::Array(items)) => state.solved_encounters = decode_encounters(items),
        Some(_) => discarded.push("solvedEncounters"),
        None => {}
    }

    match root.get("flags") {
        Some(Value::Object(flags)) => merge_flags(&mut state, flags),
        Some(_) => discarded.push("flags"),
        None => {}
    }

    if !discarded.is_empty() {
        tracing::warn!(fields = ?discarded, "Discarded malformed save fields");
    }
    state
}

fn clamp_love(love: f64) -> u8 {
    love.round().clamp(0.0, f64::from(GameConfig::MAX_LOVE)) as u8
}

fn decode_memories(items: &[Value]) -> Vec<MemoryId> {
    let mut memories: Vec<MemoryId> = Vec::new();
    for id in items.iter().filter_map(Value::as_str).map(MemoryId::new) {
        if memories.len() == GameConfig::MAX_MEMORIES {
            break;
        }
        if !memories.contains(&id) {
            memories.push(id);
        }
    }
    memories
}

fn decode_encounters(items: &[Value]) -> Vec<EncounterKey> {
    let mut keys = Vec::new();
    for key in items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(EncounterKey::parse)
    {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

fn merge_flags(state: &mut ProgressState, flags: &Map<String, Value>) {
    for (name, value) in flags {
        if let (Ok(flag), Some(value)) = (name.parse::<FlagName>(), value.as_bool()) {
            state.flags.set(flag, value);
        }
    }
}
