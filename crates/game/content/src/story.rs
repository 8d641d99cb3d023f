//! Story screens and texts surrounding the exploration scenes.
use game_core::{Character, DialogLine, Phrasebook, SceneId};

/// Static text of the title screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TitleScreen {
    pub heading: String,
    pub subtitle: String,
    pub date: String,
    pub dedication: String,
    pub prompt: String,
    pub controls: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TutorialCard {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TutorialScreen {
    pub heading: String,
    pub cards: Vec<TutorialCard>,
    pub objective: String,
    pub tip: String,
    pub prompt: String,
}

/// One selectable character card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterOption {
    pub character: Character,
    pub label: String,
    /// Shown instead of starting the game when set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterSelectScreen {
    pub heading: String,
    pub hint: String,
    pub options: Vec<CharacterOption>,
}

/// Closing dialog played on the finale scene.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Finale {
    pub scene: SceneId,
    pub heading: String,
    pub dialog: Vec<DialogLine>,
}

/// Letter revealed after the finale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinalLetter {
    pub recipient: String,
    pub message: String,
    pub inside_jokes: Vec<String>,
    pub secret_code: String,
}

impl FinalLetter {
    /// Picks the inside joke for the `opening`-th time the letter is shown.
    pub fn joke(&self, opening: usize) -> Option<&str> {
        if self.inside_jokes.is_empty() {
            return None;
        }
        Some(&self.inside_jokes[opening % self.inside_jokes.len()])
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PauseScreen {
    pub heading: String,
    pub hint: String,
}

/// Everything outside the exploration scenes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Story {
    pub title: TitleScreen,
    pub tutorial: TutorialScreen,
    pub character_select: CharacterSelectScreen,
    /// First exploration scene after character selection.
    pub start_scene: SceneId,
    pub finale: Finale,
    pub letter: FinalLetter,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pause: PauseScreen,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phrases: Phrasebook,
}
