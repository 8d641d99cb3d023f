/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Radius in pixels within which the player can interact with an entity.
    pub interact_range: u32,
    /// Love bonus granted by each memory pickup.
    pub memory_love_bonus: u8,
    /// Minimum milliseconds between two step sounds.
    pub step_interval_ms: u64,
    /// Milliseconds per revealed dialog character.
    pub dialog_char_ms: u64,
    /// Minimum milliseconds between two grid steps while a direction is held.
    pub move_interval_ms: u64,
}

impl GameConfig {
    // ===== layout =====
    pub const TILE_SIZE: u32 = 24;
    pub const GRID_WIDTH: u32 = 32;
    pub const GRID_HEIGHT: u32 = 18;

    // ===== progression thresholds =====
    pub const MAX_LOVE: u8 = 100;
    pub const INITIAL_LOVE: u8 = 10;
    pub const MAX_MEMORIES: usize = 6;
    pub const MAX_ENCOUNTERS: usize = 3;
    pub const LOVE_THRESHOLD_LONDON: u8 = 55;
    /// Memories the city asks for before pointing at the campus.
    pub const CITY_MEMORY_GOAL: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INTERACT_RANGE: u32 = Self::TILE_SIZE + 6;
    pub const DEFAULT_MEMORY_LOVE_BONUS: u8 = 8;
    pub const DEFAULT_STEP_INTERVAL_MS: u64 = 210;
    pub const DEFAULT_DIALOG_CHAR_MS: u64 = 18;
    /// One tile at 96 px/s.
    pub const DEFAULT_MOVE_INTERVAL_MS: u64 = 250;

    pub fn new() -> Self {
        Self {
            interact_range: Self::DEFAULT_INTERACT_RANGE,
            memory_love_bonus: Self::DEFAULT_MEMORY_LOVE_BONUS,
            step_interval_ms: Self::DEFAULT_STEP_INTERVAL_MS,
            dialog_char_ms: Self::DEFAULT_DIALOG_CHAR_MS,
            move_interval_ms: Self::DEFAULT_MOVE_INTERVAL_MS,
        }
    }

    /// Interaction range converted to tile units.
    pub fn interact_range_tiles(&self) -> f32 {
        self.interact_range as f32 / Self::TILE_SIZE as f32
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
