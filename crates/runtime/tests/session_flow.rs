use std::sync::atomic::{AtomicUsize, Ordering};

use game_content::{Content, ContentFactory, SceneCatalog};
use game_core::{
    AudioCue, CardinalDirection, Character, EncounterKey, EncounterOption, EncounterSpot, Exit,
    ExitRequirements, FlagName, MemoryId, MemorySpot, MoveIntent, Position, SceneId, Talker,
    TalkerVariant, TerrainKind, TileGrid, TileRect, WorldData,
};
use runtime::{
    GameEvent, InMemoryStateRepo, InputEvent, SAVE_KEY, SaveService, Screen, Session,
    StateRepository, decode_save,
};

type TestSession<R = InMemoryStateRepo> = Session<R, Vec<AudioCue>>;

/// In-memory store that counts writes.
#[derive(Default)]
struct CountingRepo {
    inner: InMemoryStateRepo,
    writes: AtomicUsize,
}

impl CountingRepo {
    fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl StateRepository for CountingRepo {
    fn get(&self, key: &str) -> runtime::repository::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> runtime::repository::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> runtime::repository::Result<()> {
        self.inner.remove(key)
    }

    fn exists(&self, key: &str) -> bool {
        self.inner.exists(key)
    }
}

/// A strip of grass: memory west of spawn, encounter north-east of it, and
/// an exit to the campus at the east end.
fn street(exit_to: &str, requirements: ExitRequirements) -> WorldData {
    let mut world = WorldData::new(
        "Calle de Prueba",
        TileGrid::new(8, 3, TerrainKind::Grass),
        Position::new(1, 1),
    );
    world.memories.push(MemorySpot {
        id: MemoryId::new("city-memory-1"),
        position: Position::new(0, 1),
        description: "Recuerdo #1".into(),
    });
    world.encounters.push(EncounterSpot {
        key: EncounterKey::Duda,
        title: "Momento: Duda".into(),
        position: Position::new(2, 0),
        intro: "La Duda aparece.".into(),
        options: [("Respirar", "respirar", 8), ("Planear visita", "plan", 12)]
            .into_iter()
            .map(|(label, value, bonus)| EncounterOption {
                label: label.into(),
                value: value.into(),
                bonus,
                response: format!("{label}!"),
            })
            .collect(),
    });
    world.exits.push(Exit {
        area: TileRect::new(6, 0, 1, 3),
        to: SceneId::new(exit_to),
        requirements,
        locked_text: None,
    });
    world
}

fn content(street: WorldData) -> Content {
    let mut content = ContentFactory::builtin().expect("built-in content loads");
    let mut scenes = SceneCatalog::new();
    scenes.insert(SceneId::new(SceneId::CITY), street);
    scenes.insert(
        SceneId::new(SceneId::CAMPUS),
        WorldData::new(
            "Campus de Prueba",
            TileGrid::new(4, 3, TerrainKind::Floor),
            Position::new(2, 1),
        ),
    );
    content.scenes = scenes;
    content
}

fn boot<R: StateRepository>(content: Content, repo: R) -> TestSession<R> {
    Session::boot(content, SaveService::new(repo), Vec::new()).expect("session boots")
}

fn run<R: StateRepository>(session: &mut TestSession<R>, inputs: impl IntoIterator<Item = InputEvent>) {
    for input in inputs {
        session.push(input);
    }
    session.pump().expect("inputs are handled");
}

fn accept<R: StateRepository>(session: &mut TestSession<R>, times: usize) {
    run(session, std::iter::repeat_n(InputEvent::Accept, times));
}

fn walk<R: StateRepository>(session: &mut TestSession<R>, direction: CardinalDirection, steps: usize) {
    for _ in 0..steps {
        run(
            session,
            [
                InputEvent::Tick { elapsed_ms: 250 },
                InputEvent::Move(MoveIntent::toward(direction)),
            ],
        );
    }
}

fn player<R: StateRepository>(session: &TestSession<R>) -> Position {
    match session.screen() {
        Screen::Exploration(exploration) => exploration.player,
        other => panic!("not exploring: {other:?}"),
    }
}

fn saved(session: &TestSession) -> game_core::ProgressState {
    let raw = session
        .saves()
        .repository()
        .get(SAVE_KEY)
        .expect("read save")
        .expect("save present");
    decode_save(&raw)
}

/// Title -> tutorial -> character select -> city, picking the unlocked option.
fn start_game<R: StateRepository>(session: &mut TestSession<R>) {
    accept(session, 2);
    run(session, [InputEvent::Right, InputEvent::Accept]);
}

#[test]
fn first_run_walks_through_tutorial_and_character_select() {
    let mut session = boot(
        content(street(SceneId::CAMPUS, ExitRequirements::default())),
        InMemoryStateRepo::new(),
    );
    assert_eq!(session.screen(), &Screen::Title);
    assert!(session.saves().repository().exists(SAVE_KEY));

    accept(&mut session, 1);
    assert_eq!(session.screen(), &Screen::Tutorial);

    accept(&mut session, 1);
    assert!(matches!(session.screen(), Screen::CharacterSelect(_)));
    assert!(saved(&session).flags.tutorial_seen);
    assert_eq!(saved(&session).current_scene, SceneId::CITY);

    // The first option is locked.
    accept(&mut session, 1);
    match session.screen() {
        Screen::CharacterSelect(select) => assert_eq!(
            select.warning.as_deref(),
            Some("Esa es otra historia...")
        ),
        other => panic!("unexpected screen {other:?}"),
    }

    run(&mut session, [InputEvent::Left, InputEvent::Accept]);
    assert_eq!(player(&session), Position::new(1, 1));
    assert_eq!(session.state().selected_character, Some(Character::Her));
    assert_eq!(saved(&session).selected_character, Some(Character::Her));

    let scenes: Vec<SceneId> = session
        .drain_events()
        .filter_map(|event| match event {
            GameEvent::SceneEntered { scene } => Some(scene),
            _ => None,
        })
        .collect();
    assert_eq!(
        scenes,
        vec![
            SceneId::new(SceneId::TITLE),
            SceneId::new(SceneId::TUTORIAL),
            SceneId::new(SceneId::CHARACTER_SELECT),
            SceneId::new(SceneId::CITY),
        ]
    );
}

#[test]
fn title_keeps_only_the_tutorial_flag() {
    let repo = InMemoryStateRepo::with_value(
        SAVE_KEY,
        r#"{"loveMeter": 70, "memories": ["city-memory-1"], "flags": {"tutorialSeen": true}}"#,
    );
    let mut session = boot(
        content(street(SceneId::CAMPUS, ExitRequirements::default())),
        repo,
    );
    assert_eq!(session.state().love_meter, 70);

    accept(&mut session, 1);
    assert!(matches!(session.screen(), Screen::CharacterSelect(_)));
    assert_eq!(session.state().love_meter, 10);
    assert!(session.state().memories.is_empty());
    assert!(session.state().flags.tutorial_seen);
    assert_eq!(saved(&session), *session.state());
}

#[test]
fn collecting_a_memory_persists_and_repeats_are_harmless() {
    let mut session = boot(
        content(street(SceneId::CAMPUS, ExitRequirements::default())),
        InMemoryStateRepo::new(),
    );
    start_game(&mut session);
    session.audio_mut().clear();

    accept(&mut session, 1);
    assert_eq!(session.state().memories, vec![MemoryId::new("city-memory-1")]);
    assert_eq!(session.state().love_meter, 18);
    assert_eq!(saved(&session).love_meter, 18);
    assert_eq!(session.audio(), &vec![AudioCue::Fanfare]);

    // Movement is frozen while the dialog is open. The tick finishes typing
    // the line, so one Accept closes it.
    walk(&mut session, CardinalDirection::East, 1);
    assert_eq!(player(&session), Position::new(1, 1));
    assert!(session.screen().dialog().is_some_and(|d| d.is_line_complete()));

    accept(&mut session, 1);
    assert!(session.screen().dialog().is_none());

    accept(&mut session, 1);
    let dialog = session.screen().dialog().expect("already-collected line");
    assert_eq!(dialog.current().map(|line| line.speaker.as_str()), Some("Sistema"));
    assert_eq!(session.state().love_meter, 18);
    assert_eq!(session.state().memories.len(), 1);
}

#[test]
fn locked_exit_respawns_and_open_exit_changes_scene() {
    let requirements = ExitRequirements {
        min_love: Some(30),
        min_memories: Some(1),
        min_encounters: Some(1),
        flag: None,
    };
    let mut session = boot(content(street(SceneId::CAMPUS, requirements)), InMemoryStateRepo::new());
    start_game(&mut session);

    // Memory: love 10 -> 18.
    accept(&mut session, 3);
    session.drain_events().for_each(drop);

    walk(&mut session, CardinalDirection::East, 5);
    assert_eq!(player(&session), Position::new(1, 1));
    let events: Vec<GameEvent> = session.drain_events().collect();
    assert!(events.contains(&GameEvent::ExitLocked {
        message: "Necesitas Love Meter >= 30.".into()
    }));
    assert_eq!(session.state().current_scene, SceneId::CITY);
    accept(&mut session, 2);

    // Encounter: intro, reply, then the menu.
    walk(&mut session, CardinalDirection::East, 1);
    accept(&mut session, 1);
    accept(&mut session, 4);
    match session.screen() {
        Screen::Exploration(exploration) => {
            let menu = exploration.menu.as_ref().expect("menu open");
            assert_eq!(menu.key(), EncounterKey::Duda);
        }
        other => panic!("unexpected screen {other:?}"),
    }
    walk(&mut session, CardinalDirection::East, 1);
    assert_eq!(player(&session), Position::new(2, 1));

    run(&mut session, [InputEvent::Down, InputEvent::Down, InputEvent::Up]);
    accept(&mut session, 1);
    assert_eq!(session.state().solved_encounters, vec![EncounterKey::Duda]);
    assert_eq!(session.state().love_meter, 30);
    accept(&mut session, 4);

    walk(&mut session, CardinalDirection::East, 4);
    assert_eq!(session.state().current_scene, SceneId::CAMPUS);
    assert_eq!(saved(&session).current_scene, SceneId::CAMPUS);
    assert_eq!(player(&session), Position::new(2, 1));
    assert_eq!(
        session.hud().map(|hud| hud.label),
        Some("Campus de Prueba".to_owned())
    );
}

#[test]
fn step_cue_is_throttled_and_walls_stop_the_player() {
    let mut session = boot(
        content(street(SceneId::CAMPUS, ExitRequirements::default())),
        InMemoryStateRepo::new(),
    );
    start_game(&mut session);
    session.audio_mut().clear();

    // Too soon after the previous step: ignored.
    run(
        &mut session,
        [
            InputEvent::Move(MoveIntent::toward(CardinalDirection::South)),
            InputEvent::Tick { elapsed_ms: 100 },
            InputEvent::Move(MoveIntent::toward(CardinalDirection::North)),
        ],
    );
    assert_eq!(player(&session), Position::new(1, 2));
    assert_eq!(session.audio(), &vec![AudioCue::Step]);

    // The grid ends below row 2.
    walk(&mut session, CardinalDirection::South, 1);
    assert_eq!(player(&session), Position::new(1, 2));
}

#[test]
fn pause_swallows_input_until_resumed() {
    let mut session = boot(
        content(street(SceneId::CAMPUS, ExitRequirements::default())),
        InMemoryStateRepo::new(),
    );
    start_game(&mut session);

    run(&mut session, [InputEvent::Pause]);
    assert!(session.is_paused());
    walk(&mut session, CardinalDirection::East, 2);
    assert_eq!(player(&session), Position::new(1, 1));
    assert_eq!(session.clock_ms(), 0);

    // Accept only resumes; it does not interact.
    accept(&mut session, 1);
    assert!(!session.is_paused());
    assert!(session.state().memories.is_empty());
}

#[test]
fn finale_records_completion_and_letter_rotates_jokes() {
    let mut session = boot(
        content(street(SceneId::BRIDGE_FINAL, ExitRequirements::default())),
        InMemoryStateRepo::new(),
    );
    let jokes = session.content().story.letter.inside_jokes.clone();
    start_game(&mut session);
    walk(&mut session, CardinalDirection::East, 5);
    assert!(matches!(session.screen(), Screen::Finale(_)));
    assert!(!session.state().final_seen);

    session.audio_mut().clear();
    // Four lines, each needing one Accept to finish typing and one to advance.
    accept(&mut session, 8);
    assert!(session.state().final_seen);
    assert_eq!(session.state().current_scene, SceneId::BRIDGE_FINAL);
    assert!(saved(&session).final_seen);
    assert_eq!(session.audio().last(), Some(&AudioCue::Fanfare));
    assert!(session.drain_events().any(|event| event == GameEvent::StoryCompleted));

    accept(&mut session, 1);
    match session.screen() {
        Screen::Finale(view) => {
            assert_eq!(view.letter.as_ref().map(|l| l.joke.as_str()), Some(jokes[0].as_str()));
        }
        other => panic!("unexpected screen {other:?}"),
    }

    // Accept on the letter replays the finale.
    accept(&mut session, 1);
    assert!(session.screen().dialog().is_some());
    accept(&mut session, 9);
    match session.screen() {
        Screen::Finale(view) => {
            assert_eq!(view.letter.as_ref().map(|l| l.joke.as_str()), Some(jokes[1].as_str()));
        }
        other => panic!("unexpected screen {other:?}"),
    }
}

#[test]
fn dialog_ticks_reveal_text_with_type_cues() {
    let mut session = boot(
        content(street(SceneId::CAMPUS, ExitRequirements::default())),
        InMemoryStateRepo::new(),
    );
    start_game(&mut session);
    accept(&mut session, 1);
    session.audio_mut().clear();

    run(&mut session, [InputEvent::Tick { elapsed_ms: 72 }]);
    let dialog = session.screen().dialog().expect("memory dialog");
    assert_eq!(dialog.visible_text(), "Recu");
    assert_eq!(
        session.audio(),
        &vec![AudioCue::TypeTick, AudioCue::TypeTick]
    );
}

#[test]
fn unlock_talker_opens_the_flag_gated_exit() {
    let requirements = ExitRequirements {
        flag: Some(FlagName::ReunionUnlocked),
        ..ExitRequirements::default()
    };
    let mut street = street(SceneId::CAMPUS, requirements);
    // South of spawn; wins the tie with the memory west of spawn.
    street.talkers.push(Talker {
        id: "guide".into(),
        name: "Guía".into(),
        position: Position::new(1, 2),
        lines: vec!["El puente te espera.".into()],
        variant: Some(TalkerVariant::Unlock {
            flag: FlagName::ReunionUnlocked,
            bonus: 5,
        }),
        sprite: None,
    });
    let mut session = boot(content(street), InMemoryStateRepo::new());
    start_game(&mut session);
    session.drain_events().for_each(drop);

    walk(&mut session, CardinalDirection::East, 5);
    assert_eq!(player(&session), Position::new(1, 1));
    assert_eq!(session.state().current_scene, SceneId::CITY);
    assert!(
        session
            .drain_events()
            .any(|event| matches!(event, GameEvent::ExitLocked { .. }))
    );
    accept(&mut session, 2);

    session.audio_mut().clear();
    accept(&mut session, 1);
    assert!(session.state().flags.reunion_unlocked);
    assert_eq!(session.state().love_meter, 15);
    assert!(saved(&session).flags.reunion_unlocked);
    assert_eq!(session.audio(), &vec![AudioCue::Fanfare]);
    accept(&mut session, 2);

    // Talking again repeats the lines without another bonus.
    session.audio_mut().clear();
    accept(&mut session, 1);
    let dialog = session.screen().dialog().expect("guide repeats");
    assert_eq!(dialog.current().map(|line| line.speaker.as_str()), Some("Guía"));
    assert_eq!(session.state().love_meter, 15);
    assert!(!session.audio().contains(&AudioCue::Fanfare));
    accept(&mut session, 2);

    walk(&mut session, CardinalDirection::East, 5);
    assert_eq!(session.state().current_scene, SceneId::CAMPUS);
    assert_eq!(saved(&session).current_scene, SceneId::CAMPUS);
    assert!(saved(&session).flags.reunion_unlocked);
}

#[test]
fn scene_changes_save_once() {
    let mut session = boot(
        content(street(SceneId::CAMPUS, ExitRequirements::default())),
        CountingRepo::default(),
    );
    accept(&mut session, 2);
    run(&mut session, [InputEvent::Right]);
    let before = session.saves().repository().writes();
    run(&mut session, [InputEvent::Accept]);
    assert_eq!(session.state().current_scene, SceneId::CITY);
    assert_eq!(session.saves().repository().writes(), before + 1);

    walk(&mut session, CardinalDirection::East, 4);
    session.drain_events().for_each(drop);
    let before = session.saves().repository().writes();
    walk(&mut session, CardinalDirection::East, 1);
    assert_eq!(session.state().current_scene, SceneId::CAMPUS);
    assert_eq!(session.saves().repository().writes(), before + 1);
    let entered: Vec<GameEvent> = session
        .drain_events()
        .filter(|event| matches!(event, GameEvent::SceneEntered { .. }))
        .collect();
    assert_eq!(
        entered,
        vec![GameEvent::SceneEntered {
            scene: SceneId::new(SceneId::CAMPUS)
        }]
    );

    let mut session = boot(
        content(street(SceneId::BRIDGE_FINAL, ExitRequirements::default())),
        CountingRepo::default(),
    );
    start_game(&mut session);
    walk(&mut session, CardinalDirection::East, 4);
    let before = session.saves().repository().writes();
    walk(&mut session, CardinalDirection::East, 1);
    assert!(matches!(session.screen(), Screen::Finale(_)));
    assert_eq!(session.state().current_scene, SceneId::BRIDGE_FINAL);
    assert_eq!(session.saves().repository().writes(), before + 1);
}
