//! Scene exit gating.
use crate::action::ProgressAction;
use crate::engine::{ExecuteError, GameEngine};
use crate::env::{Exit, WorldData};
use crate::state::{Position, ProgressState, SceneId};

/// Result of stepping onto an exit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// The player is sent back to `respawn` and shown `message`.
    Locked { message: String, respawn: Position },
    /// `current_scene` already points at `destination`; the caller persists
    /// and swaps scenes.
    Open { destination: SceneId },
}

/// Returns the exit whose area contains `tile`, if any.
pub fn exit_at(world: &WorldData, tile: Position) -> Option<&Exit> {
    world.exit_at(tile)
}

/// Returns the message for the first unmet requirement, or `None` when the
/// exit is open.
///
/// Requirements are checked as love, memories, encounters, then flag. A
/// custom locked text replaces whichever default message would apply.
pub fn lock_reason(exit: &Exit, state: &ProgressState) -> Option<String> {
    let requirements = &exit.requirements;

    let default = if let Some(min) = requirements
        .min_love
        .filter(|min| state.love_meter < *min)
    {
        format!("Necesitas Love Meter >= {min}.")
    } else if let Some(min) = requirements
        .min_memories
        .filter(|min| state.memory_count() < *min)
    {
        format!("Necesitas {min} recuerdos.")
    } else if let Some(min) = requirements
        .min_encounters
        .filter(|min| state.encounter_count() < *min)
    {
        format!("Necesitas resolver {min} momentos.")
    } else if requirements
        .flag
        .is_some_and(|flag| !state.flag(flag))
    {
        "Aún no se desbloquea esta salida.".to_owned()
    } else {
        return None;
    };

    Some(exit.locked_text.clone().unwrap_or(default))
}

/// Evaluates `exit` against the engine's state.
///
/// An open exit records the destination as the current scene before
/// returning.
pub fn evaluate_exit(
    engine: &mut GameEngine<'_>,
    world: &WorldData,
    exit: &Exit,
) -> Result<GateDecision, ExecuteError> {
    if let Some(message) = lock_reason(exit, engine.state()) {
        return Ok(GateDecision::Locked {
            message,
            respawn: world.spawn,
        });
    }

    engine.execute(&ProgressAction::enter_scene(exit.to.clone()))?;
    Ok(GateDecision::Open {
        destination: exit.to.clone(),
    })
}
