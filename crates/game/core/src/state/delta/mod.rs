//! Progress delta tracking.
//!
//! A [`ProgressDelta`] records what a single engine action changed, computed
//! by comparing the state before and after execution. The runtime uses it to
//! decide whether to persist and which events to emit.
use crate::state::{EncounterKey, FlagName, MemoryId, ProgressState, SceneId};

/// Summary of the changes made by one progress action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressDelta {
    /// Love meter increase actually applied (after clamping).
    pub love_gained: u8,
    pub memory_added: Option<MemoryId>,
    pub encounter_added: Option<EncounterKey>,
    pub flags_set: Vec<FlagName>,
    pub scene_changed: Option<SceneId>,
    pub story_completed: bool,
}

impl ProgressDelta {
    /// Computes the delta between two snapshots of the same play-through.
    pub fn from_states(before: &ProgressState, after: &ProgressState) -> Self {
        let memory_added = after
            .memories
            .iter()
            .find(|id| !before.memories.contains(id))
            .cloned();
        let encounter_added = after
            .solved_encounters
            .iter()
            .copied()
            .find(|key| !before.solved_encounters.contains(key));
        let flags_set = [FlagName::ReunionUnlocked, FlagName::TutorialSeen]
            .into_iter()
            .filter(|flag| after.flag(*flag) && !before.flag(*flag))
            .collect();
        let scene_changed =
            (after.current_scene != before.current_scene).then(|| after.current_scene.clone());

        Self {
            love_gained: after.love_meter.saturating_sub(before.love_meter),
            memory_added,
            encounter_added,
            flags_set,
            scene_changed,
            story_completed: after.final_seen && !before.final_seen,
        }
    }

    /// Returns true when nothing changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true when the change affects progression and must be persisted.
    pub fn affects_progress(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_states_produce_empty_delta() {
        let state = ProgressState::new();
        let delta = ProgressDelta::from_states(&state, &state.clone());
        assert!(delta.is_empty());
        assert!(!delta.affects_progress());
    }

    #[test]
    fn delta_captures_pickup() {
        let before = ProgressState::new();
        let mut after = before.clone();
        after.memories.push(MemoryId::new("campus-memory-2"));
        after.add_love(8);

        let delta = ProgressDelta::from_states(&before, &after);
        assert_eq!(delta.love_gained, 8);
        assert_eq!(delta.memory_added, Some(MemoryId::new("campus-memory-2")));
        assert!(delta.encounter_added.is_none());
        assert!(delta.affects_progress());
    }
}
