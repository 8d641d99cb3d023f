//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, the progress engine, and content lookups
//! so clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ErrorSeverity, ExecuteError, GameError, SceneId};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Progress(#[from] ExecuteError),

    #[error("scene {0} has no content to enter")]
    UnknownScene(SceneId),

    #[error("character select offers no option at index {0}")]
    MissingCharacterOption(usize),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(inner) => inner.severity(),
            Self::Progress(inner) => inner.severity(),
            Self::UnknownScene(_) | Self::MissingCharacterOption(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(inner) => inner.error_code(),
            Self::Progress(inner) => inner.error_code(),
            Self::UnknownScene(_) => "RUNTIME_UNKNOWN_SCENE",
            Self::MissingCharacterOption(_) => "RUNTIME_MISSING_CHARACTER_OPTION",
        }
    }
}
