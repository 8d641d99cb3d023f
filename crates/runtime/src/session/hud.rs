//! Heads-up display values for exploration scenes.
use game_core::{GameConfig, ProgressState, SceneId, objective_text};

/// Snapshot of what the HUD shows. Recomputed on every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudView {
    pub love: u8,
    pub memories: usize,
    pub objective: String,
    /// Human-readable scene name.
    pub label: String,
}

impl HudView {
    pub fn compute(scene: &SceneId, label: &str, state: &ProgressState) -> Self {
        Self {
            love: state.love_meter,
            memories: state.memory_count(),
            objective: objective_text(scene, state),
            label: label.to_owned(),
        }
    }

    /// Fill ratio of the love bar in `0.0..=1.0`.
    pub fn love_ratio(&self) -> f64 {
        (f64::from(self.love) / f64::from(GameConfig::MAX_LOVE)).clamp(0.0, 1.0)
    }

    pub fn memories_text(&self) -> String {
        format!("RECUERDOS: {}/{}", self.memories, GameConfig::MAX_MEMORIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::MemoryId;

    #[test]
    fn reflects_current_progress() {
        let mut state = ProgressState::new();
        state.love_meter = 50;
        state.memories.push(MemoryId::new("city-memory-1"));
        let hud = HudView::compute(&SceneId::new(SceneId::CITY), "Ciudad Nocturna", &state);

        assert_eq!(hud.memories_text(), "RECUERDOS: 1/6");
        assert_eq!(hud.love_ratio(), 0.5);
        assert_eq!(hud.label, "Ciudad Nocturna");
        assert_eq!(hud.objective, objective_text(&SceneId::new(SceneId::CITY), &state));
    }
}
