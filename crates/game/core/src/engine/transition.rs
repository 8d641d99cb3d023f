//! Action transition dispatch.

use crate::action::{ProgressAction, ProgressTransition};
use crate::config::GameConfig;
use crate::state::ProgressState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Runs a transition through the three-phase pipeline.
///
/// 1. `pre_validate` - check preconditions before mutation
/// 2. `apply` - mutate the state
/// 3. `post_validate` - verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut ProgressState,
    config: &GameConfig,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ProgressTransition,
{
    transition
        .pre_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}

/// Routes each action to its transition.
pub(super) fn execute_transition(
    action: &ProgressAction,
    state: &mut ProgressState,
    config: &GameConfig,
) -> Result<(), ExecuteError> {
    match action {
        ProgressAction::CollectMemory(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::CollectMemory)
        }
        ProgressAction::ResolveEncounter(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::ResolveEncounter)
        }
        ProgressAction::UnlockFlag(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::UnlockFlag)
        }
        ProgressAction::EnterScene(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::EnterScene)
        }
        ProgressAction::CompleteStory(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::CompleteStory)
        }
    }
}
