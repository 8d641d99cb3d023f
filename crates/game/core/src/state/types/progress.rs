use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The fixed set of scripted encounters a play-through can resolve.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterKey {
    #[strum(serialize = "duda")]
    #[cfg_attr(feature = "serde", serde(rename = "duda"))]
    Duda,
    #[strum(serialize = "distancia")]
    #[cfg_attr(feature = "serde", serde(rename = "distancia"))]
    Distancia,
    #[strum(serialize = "extrañar")]
    #[cfg_attr(feature = "serde", serde(rename = "extrañar"))]
    Extranar,
}

impl EncounterKey {
    /// Parses a persisted key, returning `None` for anything outside the set.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    pub fn all() -> impl Iterator<Item = EncounterKey> {
        Self::iter()
    }
}

/// Playable character chosen at character select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Character {
    My,
    Her,
}

/// Named one-shot story milestones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum FlagName {
    ReunionUnlocked,
    TutorialSeen,
}

/// Boolean story switches persisted alongside progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProgressFlags {
    pub reunion_unlocked: bool,
    pub tutorial_seen: bool,
}

impl ProgressFlags {
    pub fn get(&self, flag: FlagName) -> bool {
        match flag {
            FlagName::ReunionUnlocked => self.reunion_unlocked,
            FlagName::TutorialSeen => self.tutorial_seen,
        }
    }

    pub fn set(&mut self, flag: FlagName, value: bool) {
        match flag {
            FlagName::ReunionUnlocked => self.reunion_unlocked = value,
            FlagName::TutorialSeen => self.tutorial_seen = value,
        }
    }
}
