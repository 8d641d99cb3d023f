use crate::action::ProgressTransition;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EncounterKey, FlagName, MemoryId, ProgressState, SceneId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("memory {0} already collected")]
    AlreadyCollected(MemoryId),

    #[error("memory collection is full ({max} memories)")]
    MemoryLimitReached { max: usize },

    #[error("encounter {0} already resolved")]
    AlreadyResolved(EncounterKey),

    #[error("flag {0:?} already set")]
    FlagAlreadySet(FlagName),

    #[error("progress invariant violated: {0}")]
    InvariantViolated(&'static str),
}

impl GameError for ProgressError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyCollected(_) | Self::AlreadyResolved(_) => ErrorSeverity::Recoverable,
            Self::MemoryLimitReached { .. } | Self::FlagAlreadySet(_) => ErrorSeverity::Validation,
            Self::InvariantViolated(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyCollected(_) => "PROGRESS_ALREADY_COLLECTED",
            Self::MemoryLimitReached { .. } => "PROGRESS_MEMORY_LIMIT_REACHED",
            Self::AlreadyResolved(_) => "PROGRESS_ALREADY_RESOLVED",
            Self::FlagAlreadySet(_) => "PROGRESS_FLAG_ALREADY_SET",
            Self::InvariantViolated(_) => "PROGRESS_INVARIANT_VIOLATED",
        }
    }
}

fn check_invariants(state: &ProgressState) -> Result<(), ProgressError> {
    match state.invariant_violation() {
        Some(reason) => Err(ProgressError::InvariantViolated(reason)),
        None => Ok(()),
    }
}

/// Every mutation of progression the engine accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressAction {
    CollectMemory(CollectMemoryAction),
    ResolveEncounter(ResolveEncounterAction),
    UnlockFlag(UnlockFlagAction),
    EnterScene(EnterSceneAction),
    CompleteStory(CompleteStoryAction),
}

impl ProgressAction {
    pub fn collect_memory(id: MemoryId) -> Self {
        Self::CollectMemory(CollectMemoryAction { id })
    }

    pub fn resolve_encounter(key: EncounterKey, bonus: u8) -> Self {
        Self::ResolveEncounter(ResolveEncounterAction { key, bonus })
    }

    pub fn unlock_flag(flag: FlagName, bonus: u8) -> Self {
        Self::UnlockFlag(UnlockFlagAction { flag, bonus })
    }

    pub fn enter_scene(scene: SceneId) -> Self {
        Self::EnterScene(EnterSceneAction { scene })
    }

    pub fn complete_story(finale: SceneId) -> Self {
        Self::CompleteStory(CompleteStoryAction { finale })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CollectMemory(_) => "collect_memory",
            Self::ResolveEncounter(_) => "resolve_encounter",
            Self::UnlockFlag(_) => "unlock_flag",
            Self::EnterScene(_) => "enter_scene",
            Self::CompleteStory(_) => "complete_story",
        }
    }
}

/// Picks up a memory and grants the configured love bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectMemoryAction {
    pub id: MemoryId,
}

impl ProgressTransition for CollectMemoryAction {
    type Error = ProgressError;

    fn pre_validate(&self, state: &ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        if state.has_memory(&self.id) {
            return Err(ProgressError::AlreadyCollected(self.id.clone()));
        }
        if state.memory_count() >= GameConfig::MAX_MEMORIES {
            return Err(ProgressError::MemoryLimitReached {
                max: GameConfig::MAX_MEMORIES,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut ProgressState, config: &GameConfig) -> Result<(), Self::Error> {
        state.memories.push(self.id.clone());
        state.add_love(config.memory_love_bonus);
        Ok(())
    }

    fn post_validate(&self, state: &ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}

/// Marks an encounter solved and grants the chosen option's bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolveEncounterAction {
    pub key: EncounterKey,
    pub bonus: u8,
}

impl ProgressTransition for ResolveEncounterAction {
    type Error = ProgressError;

    fn pre_validate(&self, state: &ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        if state.is_solved(self.key) {
            return Err(ProgressError::AlreadyResolved(self.key));
        }
        Ok(())
    }

    fn apply(&self, state: &mut ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        state.solved_encounters.push(self.key);
        state.add_love(self.bonus);
        Ok(())
    }

    fn post_validate(&self, state: &ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}

/// Sets a write-once story flag, optionally granting love.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockFlagAction {
    pub flag: FlagName,
    pub bonus: u8,
}

impl ProgressTransition for UnlockFlagAction {
    type Error = ProgressError;

    fn pre_validate(&self, state: &ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        if state.flag(self.flag) {
            return Err(ProgressError::FlagAlreadySet(self.flag));
        }
        Ok(())
    }

    fn apply(&self, state: &mut ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        state.flags.set(self.flag, true);
        state.add_love(self.bonus);
        Ok(())
    }

    fn post_validate(&self, state: &ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        check_invariants(state)
    }
}

/// Records the scene the play-through should resume into.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnterSceneAction {
    pub scene: SceneId,
}

impl ProgressTransition for EnterSceneAction {
    type Error = ProgressError;

    fn apply(&self, state: &mut ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        state.current_scene = self.scene.clone();
        Ok(())
    }
}

/// Marks the finale as seen and parks the play-through on the finale scene.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompleteStoryAction {
    pub finale: SceneId,
}

impl ProgressTransition for CompleteStoryAction {
    type Error = ProgressError;

    fn apply(&self, state: &mut ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        state.final_seen = true;
        state.current_scene = self.finale.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_rejects_duplicates_and_full_collection() {
        let config = GameConfig::default();
        let mut state = ProgressState::new();
        let action = CollectMemoryAction {
            id: MemoryId::new("city-memory-1"),
        };
        action.pre_validate(&state, &config).unwrap();
        action.apply(&mut state, &config).unwrap();
        assert_eq!(state.love_meter, 18);
        assert_eq!(
            action.pre_validate(&state, &config),
            Err(ProgressError::AlreadyCollected(MemoryId::new("city-memory-1")))
        );

        state.memories = (0..6).map(|i| MemoryId::new(format!("m{i}"))).collect();
        let extra = CollectMemoryAction {
            id: MemoryId::new("m9"),
        };
        assert_eq!(
            extra.pre_validate(&state, &config),
            Err(ProgressError::MemoryLimitReached { max: 6 })
        );
    }

    #[test]
    fn unlock_flag_is_write_once() {
        let config = GameConfig::default();
        let mut state = ProgressState::new();
        let action = UnlockFlagAction {
            flag: FlagName::ReunionUnlocked,
            bonus: 8,
        };
        action.apply(&mut state, &config).unwrap();
        assert!(state.flags.reunion_unlocked);
        let err = action.pre_validate(&state, &config).unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "PROGRESS_FLAG_ALREADY_SET");
    }

    #[test]
    fn post_validate_catches_corruption() {
        let config = GameConfig::default();
        let mut state = ProgressState::new();
        state.solved_encounters = vec![EncounterKey::Duda, EncounterKey::Duda];
        let action = EnterSceneAction {
            scene: SceneId::new(SceneId::CITY),
        };
        assert!(action.post_validate(&state, &config).is_ok());
        let resolve = ResolveEncounterAction {
            key: EncounterKey::Distancia,
            bonus: 9,
        };
        assert_eq!(
            resolve.post_validate(&state, &config),
            Err(ProgressError::InvariantViolated("duplicate encounter"))
        );
    }
}
