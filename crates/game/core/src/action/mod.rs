//! Action domain.
//!
//! - `progress`: the canonical progression mutations executed by the engine
//! - `movement`: four-directional tile stepping
//! - `interact`: nearest-entity interaction and encounter choices
//! - `exit`: scene exit gating
pub mod exit;
pub mod interact;
pub mod movement;
pub mod progress;

pub use exit::{GateDecision, evaluate_exit, exit_at, lock_reason};
pub use interact::{
    ChoiceError, ChoiceOption, Interactable, InteractionOutcome, InteractionResolver,
    PendingChoice,
};
pub use movement::{CardinalDirection, MoveError, MoveIntent, step};
pub use progress::{
    CollectMemoryAction, CompleteStoryAction, EnterSceneAction, ProgressAction, ProgressError,
    ResolveEncounterAction, UnlockFlagAction,
};

use crate::config::GameConfig;
use crate::state::ProgressState;

/// Defines how a concrete progress action mutates the state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the mutation. Hooks receive the
/// active configuration and must stay side-effect free.
pub trait ProgressTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &ProgressState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action. Implementations may assume `pre_validate` passed.
    fn apply(&self, state: &mut ProgressState, config: &GameConfig) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(
        &self,
        _state: &ProgressState,
        _config: &GameConfig,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Fire-and-forget sound cue requested by game logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AudioCue {
    Step,
    Confirm,
    TypeTick,
    Fanfare,
}

/// One attributed line of dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogLine {
    pub speaker: String,
    pub text: String,
}

impl DialogLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}
