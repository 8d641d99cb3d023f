//! Error types for the action execution pipeline.

use crate::action::ProgressError;
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("collect memory action failed: {0}")]
    CollectMemory(TransitionPhaseError<ProgressError>),

    #[error("resolve encounter action failed: {0}")]
    ResolveEncounter(TransitionPhaseError<ProgressError>),

    #[error("unlock flag action failed: {0}")]
    UnlockFlag(TransitionPhaseError<ProgressError>),

    #[error("enter scene action failed: {0}")]
    EnterScene(TransitionPhaseError<ProgressError>),

    #[error("complete story action failed: {0}")]
    CompleteStory(TransitionPhaseError<ProgressError>),
}

impl ExecuteError {
    /// Returns the phase error regardless of which action produced it.
    pub fn phase_error(&self) -> &TransitionPhaseError<ProgressError> {
        match self {
            Self::CollectMemory(inner)
            | Self::ResolveEncounter(inner)
            | Self::UnlockFlag(inner)
            | Self::EnterScene(inner)
            | Self::CompleteStory(inner) => inner,
        }
    }

    pub fn progress_error(&self) -> &ProgressError {
        &self.phase_error().error
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.progress_error().severity()
    }

    fn error_code(&self) -> &'static str {
        self.progress_error().error_code()
    }
}
