//! Per-screen presentation state.
use game_core::{Position, SceneId};

use super::dialog::DialogBox;
use super::menu::ChoiceMenu;

/// The screen currently receiving input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Title,
    Tutorial,
    CharacterSelect(CharacterSelect),
    Exploration(Exploration),
    Finale(FinaleView),
}

impl Screen {
    /// Scene identifier of this screen.
    pub fn scene(&self) -> SceneId {
        match self {
            Self::Title => SceneId::new(SceneId::TITLE),
            Self::Tutorial => SceneId::new(SceneId::TUTORIAL),
            Self::CharacterSelect(_) => SceneId::new(SceneId::CHARACTER_SELECT),
            Self::Exploration(exploration) => exploration.scene.clone(),
            Self::Finale(finale) => finale.scene.clone(),
        }
    }

    /// Open dialog, if the screen has one.
    pub fn dialog(&self) -> Option<&DialogBox> {
        match self {
            Self::Exploration(exploration) => exploration.dialog.as_ref(),
            Self::Finale(finale) => finale.dialog.as_ref(),
            _ => None,
        }
    }

    pub(crate) fn dialog_mut(&mut self) -> Option<&mut DialogBox> {
        match self {
            Self::Exploration(exploration) => exploration.dialog.as_mut(),
            Self::Finale(finale) => finale.dialog.as_mut(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterSelect {
    pub selected: usize,
    /// Shown after confirming a locked option; cleared on the next move.
    pub warning: Option<String>,
}

/// Free roaming inside one scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration {
    pub scene: SceneId,
    pub player: Position,
    pub dialog: Option<DialogBox>,
    pub menu: Option<ChoiceMenu>,
    pub(crate) last_move_ms: Option<u64>,
    pub(crate) last_step_cue_ms: Option<u64>,
}

impl Exploration {
    pub fn new(scene: SceneId, spawn: Position) -> Self {
        Self {
            scene,
            player: spawn,
            dialog: None,
            menu: None,
            last_move_ms: None,
            last_step_cue_ms: None,
        }
    }

    /// Movement is frozen while a dialog or menu is open.
    pub fn is_busy(&self) -> bool {
        self.dialog.is_some() || self.menu.is_some()
    }
}

/// The reunion scene and the final letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinaleView {
    pub scene: SceneId,
    pub dialog: Option<DialogBox>,
    /// Set once the finale dialog has run to completion.
    pub ready_for_letter: bool,
    pub letter: Option<LetterView>,
}

/// The opened final letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterView {
    pub joke: String,
}
