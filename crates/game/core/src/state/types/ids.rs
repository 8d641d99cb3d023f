//! String identifiers for scenes and memories.
//!
//! Both are content-defined, so they stay open strings rather than enums.
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a named scene (`"CityScene"`, `"TitleScene"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SceneId(String);

impl SceneId {
    pub const TITLE: &'static str = "TitleScene";
    pub const TUTORIAL: &'static str = "TutorialScene";
    pub const CHARACTER_SELECT: &'static str = "CharacterSelectScene";
    pub const CITY: &'static str = "CityScene";
    pub const CAMPUS: &'static str = "CampusScene";
    pub const LONDON: &'static str = "LondonScene";
    pub const BRIDGE_FINAL: &'static str = "BridgeFinalScene";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn title() -> Self {
        Self::new(Self::TITLE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SceneId {
    fn default() -> Self {
        Self::title()
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SceneId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for SceneId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SceneId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for SceneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifier of a collectible memory (`"city-memory-1"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MemoryId(String);

impl MemoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MemoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<&str> for MemoryId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
