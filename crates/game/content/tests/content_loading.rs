use std::fs;

use game_content::ContentFactory;
use game_core::{
    EncounterKey, FlagName, Position, SceneId, SceneOracle, TalkerVariant, TerrainKind,
};

#[test]
fn builtin_worlds_match_story_layout() {
    let content = ContentFactory::builtin().expect("built-in content loads");
    let city = content
        .scenes
        .world(&SceneId::new(SceneId::CITY))
        .expect("city scene");
    assert_eq!(city.label, "Ciudad Nocturna");
    assert_eq!(city.spawn, Position::new(3, 14));
    assert_eq!(city.memories.len(), 3);
    assert_eq!(city.encounter(EncounterKey::Duda).map(|e| e.options.len()), Some(3));
    assert_eq!(
        city.exit_at(Position::new(30, 9)).map(|exit| exit.to.clone()),
        Some(SceneId::new(SceneId::CAMPUS))
    );
    assert!(matches!(
        city.talkers[3].variant,
        Some(TalkerVariant::PerCharacter { .. })
    ));

    let campus = content
        .scenes
        .world(&SceneId::new(SceneId::CAMPUS))
        .expect("campus scene");
    let london_gate = campus
        .exit_at(Position::new(30, 13))
        .expect("london gate");
    assert_eq!(london_gate.requirements.min_love, Some(55));
    assert_eq!(london_gate.requirements.min_memories, Some(6));
    assert_eq!(london_gate.requirements.min_encounters, Some(3));
    assert!(campus.encounter(EncounterKey::Extranar).is_some());

    let london = content
        .scenes
        .world(&SceneId::new(SceneId::LONDON))
        .expect("london scene");
    assert!(london.grid.is_blocked(Position::new(10, 9)));
    assert_eq!(
        london.grid.terrain(Position::new(10, 9)),
        Some(TerrainKind::Water)
    );
    assert!(london.grid.is_passable(Position::new(15, 9)));
    let finale_gate = london
        .exit_at(Position::new(29, 13))
        .expect("finale gate");
    assert_eq!(finale_gate.requirements.flag, Some(FlagName::ReunionUnlocked));
    assert_eq!(finale_gate.to, content.story.finale.scene);
}

#[test]
fn builtin_story_texts() {
    let content = ContentFactory::builtin().expect("built-in content loads");
    let story = &content.story;
    assert_eq!(story.letter.secret_code, "LSE2026❤");
    assert_eq!(story.letter.inside_jokes.len(), 3);
    assert_eq!(story.finale.dialog.len(), 4);
    assert_eq!(
        story.character_select.options[0].locked.as_deref(),
        Some("Esa es otra historia...")
    );
    assert_eq!(story.phrases.sign_speaker, "Letrero");
}

#[test]
fn loads_directory_and_defaults_missing_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("scenes")).expect("scenes dir");
    fs::write(
        dir.path().join("story.ron"),
        include_str!("../data/story.ron"),
    )
    .expect("story");
    for name in ["city", "campus", "london"] {
        let text = match name {
            "city" => include_str!("../data/scenes/city.ron"),
            "campus" => include_str!("../data/scenes/campus.ron"),
            _ => include_str!("../data/scenes/london.ron"),
        };
        fs::write(dir.path().join("scenes").join(format!("{name}.ron")), text).expect("scene");
    }
    fs::write(dir.path().join("scenes").join("notes.txt"), "ignored").expect("notes");

    let content = ContentFactory::from_dir(dir.path()).expect("directory content loads");
    assert_eq!(content.scenes.len(), 3);
    assert_eq!(content.config.interact_range, 30);
}

#[test]
fn directory_with_dangling_exit_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("scenes")).expect("scenes dir");
    fs::write(
        dir.path().join("story.ron"),
        include_str!("../data/story.ron"),
    )
    .expect("story");
    fs::write(
        dir.path().join("scenes").join("city.ron"),
        include_str!("../data/scenes/city.ron"),
    )
    .expect("scene");

    let err = ContentFactory::from_dir(dir.path())
        .err()
        .expect("campus is missing");
    assert!(err.to_string().contains("unknown scene CampusScene"));
}

fn write_builtin_dir(dir: &std::path::Path) {
    fs::create_dir(dir.join("scenes")).expect("scenes dir");
    fs::write(dir.join("story.ron"), include_str!("../data/story.ron")).expect("story");
    for (name, text) in [
        ("city", include_str!("../data/scenes/city.ron")),
        ("campus", include_str!("../data/scenes/campus.ron")),
        ("london", include_str!("../data/scenes/london.ron")),
    ] {
        fs::write(dir.join("scenes").join(format!("{name}.ron")), text).expect("scene");
    }
}

fn annex_scene(memory_prefix: &str) -> String {
    include_str!("../data/scenes/campus.ron")
        .replacen("\"CampusScene\"", "\"AnnexScene\"", 1)
        .replace("campus-memory-", memory_prefix)
}

#[test]
fn repeated_memory_ids_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_builtin_dir(dir.path());
    fs::write(
        dir.path().join("scenes").join("annex.ron"),
        annex_scene("campus-memory-"),
    )
    .expect("annex");

    let err = ContentFactory::from_dir(dir.path())
        .err()
        .expect("campus memories appear twice");
    let message = err.to_string();
    assert!(message.contains("memory campus-memory-"), "{message}");
    assert!(message.contains("is defined twice"), "{message}");
}

#[test]
fn more_memories_than_a_collection_holds_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_builtin_dir(dir.path());
    fs::write(
        dir.path().join("scenes").join("annex.ron"),
        annex_scene("annex-memory-"),
    )
    .expect("annex");

    let err = ContentFactory::from_dir(dir.path())
        .err()
        .expect("nine memories exceed the collection");
    assert!(
        err.to_string()
            .contains("content defines 9 memories, at most 6 can be collected"),
        "{err}"
    );
}
