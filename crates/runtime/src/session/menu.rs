//! Encounter choice menu.
use game_core::{ChoiceOption, EncounterKey, PendingChoice};

/// Open encounter menu with a wrapping cursor.
///
/// There is no cancel: once opened, the menu closes only by confirming one
/// of its options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceMenu {
    key: EncounterKey,
    title: String,
    options: Vec<ChoiceOption>,
    selected: usize,
}

impl ChoiceMenu {
    /// Opens a menu with the first option selected. Returns `None` when
    /// there is nothing to choose from.
    pub fn open(choice: PendingChoice) -> Option<Self> {
        if choice.options.is_empty() {
            return None;
        }
        Some(Self {
            key: choice.key,
            title: choice.title,
            options: choice.options,
            selected: 0,
        })
    }

    pub fn key(&self) -> EncounterKey {
        self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &ChoiceOption {
        &self.options[self.selected]
    }

    /// Moves the cursor by `delta`, wrapping at both ends.
    pub fn move_by(&mut self, delta: isize) {
        let len = self.options.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    /// Closes the menu, returning the encounter and the picked option value.
    pub fn confirm(self) -> (EncounterKey, String) {
        let value = self.options[self.selected].value.clone();
        (self.key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> ChoiceMenu {
        ChoiceMenu::open(PendingChoice {
            key: EncounterKey::Duda,
            title: "Momento: Duda".into(),
            options: ["respirar", "mensaje", "plan"]
                .into_iter()
                .map(|value| ChoiceOption {
                    label: value.to_uppercase(),
                    value: value.into(),
                })
                .collect(),
        })
        .expect("options present")
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut menu = menu();
        menu.move_by(-1);
        assert_eq!(menu.selected().value, "plan");
        menu.move_by(1);
        assert_eq!(menu.selected_index(), 0);
        menu.move_by(4);
        assert_eq!(menu.selected().value, "mensaje");
    }

    #[test]
    fn confirm_returns_the_selected_value() {
        let mut menu = menu();
        menu.move_by(2);
        assert_eq!(menu.confirm(), (EncounterKey::Duda, "plan".to_owned()));
    }

    #[test]
    fn empty_choice_does_not_open() {
        let choice = PendingChoice {
            key: EncounterKey::Distancia,
            title: String::new(),
            options: Vec::new(),
        };
        assert!(ChoiceMenu::open(choice).is_none());
    }
}
