use game_core::{Character, EncounterKey, MemoryId, ProgressState, SceneId};
use proptest::prelude::*;
use runtime::{FileStateRepository, InMemoryStateRepo, SAVE_KEY, SaveService, StateRepository};

fn state_strategy() -> impl Strategy<Value = ProgressState> {
    (
        prop::sample::select(vec![
            SceneId::TITLE,
            SceneId::CITY,
            SceneId::CAMPUS,
            SceneId::LONDON,
            SceneId::BRIDGE_FINAL,
        ]),
        any::<bool>(),
        0_u8..=100,
        prop::option::of(prop::sample::select(vec![Character::My, Character::Her])),
        prop::collection::btree_set(0_u8..12, 0..=6),
        prop::sample::subsequence(
            vec![
                EncounterKey::Duda,
                EncounterKey::Distancia,
                EncounterKey::Extranar,
            ],
            0..=3,
        ),
        any::<(bool, bool)>(),
    )
        .prop_map(
            |(scene, final_seen, love, character, memories, encounters, (reunion, tutorial))| {
                let mut state = ProgressState::new();
                state.current_scene = SceneId::new(scene);
                state.final_seen = final_seen;
                state.love_meter = love;
                state.selected_character = character;
                state.memories = memories
                    .into_iter()
                    .map(|i| MemoryId::new(format!("memory-{i}")))
                    .collect();
                state.solved_encounters = encounters;
                state.flags.reunion_unlocked = reunion;
                state.flags.tutorial_seen = tutorial;
                state
            },
        )
}

proptest! {
    #[test]
    fn persisted_state_loads_back_unchanged(state in state_strategy()) {
        let saves = SaveService::new(InMemoryStateRepo::new());
        saves.persist(&state).unwrap();
        prop_assert_eq!(saves.load(), state);
    }

    #[test]
    fn arbitrary_text_always_loads_a_valid_state(raw in ".{0,64}") {
        let saves = SaveService::new(InMemoryStateRepo::with_value(SAVE_KEY, raw));
        let state = saves.load();
        prop_assert!(state.invariant_violation().is_none());
    }
}

#[test]
fn unknown_encounter_keys_are_dropped_on_load() {
    let saves = SaveService::new(InMemoryStateRepo::with_value(
        SAVE_KEY,
        r#"{"solvedEncounters": ["duda", "bogus-key"]}"#,
    ));
    assert_eq!(saves.load().solved_encounters, vec![EncounterKey::Duda]);
}

#[test]
fn file_repository_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = ProgressState::new();
    state.current_scene = SceneId::new(SceneId::CAMPUS);
    state.love_meter = 61;
    state.memories.push(MemoryId::new("campus-memory-1"));

    {
        let saves = SaveService::new(FileStateRepository::new(dir.path()).expect("repo"));
        saves.persist(&state).expect("persist");
    }

    let saves = SaveService::new(FileStateRepository::new(dir.path()).expect("repo"));
    assert!(saves.repository().exists(SAVE_KEY));
    assert_eq!(saves.load(), state);
    assert!(dir.path().join(format!("{SAVE_KEY}.json")).exists());
}
