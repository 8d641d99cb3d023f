//! HUD objective line.
use crate::config::GameConfig;
use crate::state::{EncounterKey, ProgressState, SceneId};

/// Returns the objective shown for `scene` given the current progress.
pub fn objective_text(scene: &SceneId, state: &ProgressState) -> String {
    let memories = state.memory_count();
    let encounters = state.encounter_count();

    match scene.as_str() {
        SceneId::CITY => {
            if memories < GameConfig::CITY_MEMORY_GOAL || !state.is_solved(EncounterKey::Duda) {
                "Ciudad: habla, junta 3 recuerdos y transforma la Duda.".to_owned()
            } else {
                "Objetivo: cruza a la derecha para ir al campus.".to_owned()
            }
        }
        SceneId::CAMPUS => {
            if memories < GameConfig::MAX_MEMORIES
                || encounters < GameConfig::MAX_ENCOUNTERS
                || state.love_meter < GameConfig::LOVE_THRESHOLD_LONDON
            {
                format!(
                    "Campus: recuerdos {memories}/{}, momentos {encounters}/{}, love {}/{}.",
                    GameConfig::MAX_MEMORIES,
                    GameConfig::MAX_ENCOUNTERS,
                    state.love_meter,
                    GameConfig::LOVE_THRESHOLD_LONDON,
                )
            } else {
                "Objetivo: salida inferior derecha para ir a Londres.".to_owned()
            }
        }
        SceneId::LONDON => {
            if state.flags.reunion_unlocked {
                "Objetivo: cruza a la derecha y corre al puente final.".to_owned()
            } else {
                "Londres: habla con la Guarda del Puente para abrir el reencuentro.".to_owned()
            }
        }
        SceneId::BRIDGE_FINAL => "Final: abre la carta interactiva con E/ENTER.".to_owned(),
        _ => "Sigue explorando juntos.".to_owned(),
    }
}
