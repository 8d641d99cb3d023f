//! High-level occurrences during a play-through.

use game_core::{DialogLine, ProgressDelta, SceneId};

/// Something the frontend may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A screen or exploration scene became active.
    SceneEntered { scene: SceneId },

    /// A dialog line started typing.
    DialogLine(DialogLine),

    /// Progress changed and was persisted.
    ProgressChanged(ProgressDelta),

    /// The player stepped onto a locked exit and was sent back to spawn. The
    /// message is also shown in a dialog, without a separate `DialogLine`.
    ExitLocked { message: String },

    /// The finale dialog finished.
    StoryCompleted,

    /// The final letter was opened, showing `joke`.
    LetterOpened { joke: String },
}

impl GameEvent {
    /// Short text for a message log.
    pub fn log_line(&self) -> Option<String> {
        match self {
            Self::SceneEntered { scene } => Some(format!("-> {scene}")),
            Self::DialogLine(line) => Some(format!("{}: {}", line.speaker, line.text)),
            Self::ExitLocked { message } => Some(message.clone()),
            Self::ProgressChanged(_) | Self::StoryCompleted | Self::LetterOpened { .. } => None,
        }
    }
}
