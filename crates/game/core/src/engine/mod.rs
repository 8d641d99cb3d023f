//! Progress action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`ProgressState`]. It
//! drives each action through its transition phases and reports what changed
//! as a [`ProgressDelta`].

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::ProgressAction;
use crate::config::GameConfig;
use crate::state::{ProgressDelta, ProgressState};

/// Applies progress actions to a borrowed state.
///
/// A failed action leaves the state as it was before `execute` was called.
pub struct GameEngine<'a> {
    state: &'a mut ProgressState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut ProgressState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &ProgressState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.config
    }

    /// Executes an action and returns the resulting delta.
    pub fn execute(&mut self, action: &ProgressAction) -> Result<ProgressDelta, ExecuteError> {
        let before = self.state.clone();

        if let Err(error) = transition::execute_transition(action, self.state, self.config) {
            *self.state = before;
            return Err(error);
        }

        Ok(ProgressDelta::from_states(&before, self.state))
    }
}
