//! Per-scene content: layout, entities and exits.
use crate::env::TileGrid;
use crate::state::{EncounterKey, FlagName, MemoryId, Position, SceneId, TileRect};

/// A character the player can talk to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Talker {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub lines: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub variant: Option<TalkerVariant>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite: Option<String>,
}

/// Content-driven special behaviour for a talker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TalkerVariant {
    /// Replaces the lines with `template`, where `{name}` becomes `her` when
    /// the selected character is `Her` and `other` otherwise.
    PerCharacter {
        template: String,
        her: String,
        other: String,
    },
    /// On first interaction sets `flag` and grants `bonus` love.
    Unlock { flag: FlagName, bonus: u8 },
}

/// A one-time collectible memory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemorySpot {
    pub id: MemoryId,
    pub position: Position,
    pub description: String,
}

/// One answer of an encounter menu.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterOption {
    pub label: String,
    pub value: String,
    pub bonus: u8,
    pub response: String,
}

/// A one-time scripted choice event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSpot {
    pub key: EncounterKey,
    pub title: String,
    pub position: Position,
    pub intro: String,
    pub options: Vec<EncounterOption>,
}

impl EncounterSpot {
    pub fn option(&self, value: &str) -> Option<&EncounterOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// A read-only sign or prop with text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sign {
    pub id: String,
    pub position: Position,
    pub lines: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite: Option<String>,
}

/// Progress thresholds an exit demands before it lets the player through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExitRequirements {
    pub min_love: Option<u8>,
    pub min_memories: Option<usize>,
    pub min_encounters: Option<usize>,
    pub flag: Option<FlagName>,
}

impl ExitRequirements {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A scene-transition region.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exit {
    pub area: TileRect,
    pub to: SceneId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: ExitRequirements,
    /// Overrides every generated locked message.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked_text: Option<String>,
}

/// Immutable content of one exploration scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldData {
    pub label: String,
    pub grid: TileGrid,
    pub spawn: Position,
    pub talkers: Vec<Talker>,
    pub memories: Vec<MemorySpot>,
    pub encounters: Vec<EncounterSpot>,
    pub signs: Vec<Sign>,
    pub exits: Vec<Exit>,
}

impl WorldData {
    /// Creates an empty world on `grid`; entities are pushed by the caller.
    pub fn new(label: impl Into<String>, grid: TileGrid, spawn: Position) -> Self {
        Self {
            label: label.into(),
            grid,
            spawn,
            talkers: Vec::new(),
            memories: Vec::new(),
            encounters: Vec::new(),
            signs: Vec::new(),
            exits: Vec::new(),
        }
    }

    pub fn encounter(&self, key: EncounterKey) -> Option<&EncounterSpot> {
        self.encounters.iter().find(|spot| spot.key == key)
    }

    /// Returns the first exit whose area contains `position`.
    pub fn exit_at(&self, position: Position) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.area.contains(position))
    }

    /// Positions of every entity, used for bounds validation.
    pub fn entity_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.talkers
            .iter()
            .map(|t| t.position)
            .chain(self.memories.iter().map(|m| m.position))
            .chain(self.encounters.iter().map(|e| e.position))
            .chain(self.signs.iter().map(|s| s.position))
    }
}
