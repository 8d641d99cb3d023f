//! Scene flow controller.
//!
//! [`Session`] owns the progress record and the active screen. Frontends
//! push [`InputEvent`]s and call [`Session::pump`] once per frame; the
//! session processes the queue in order on the calling thread, persists
//! every progression change before returning, and queues [`GameEvent`]s for
//! the frontend to drain.
//!
//! Screen flow:
//!
//! ```text
//! Title -> Tutorial (first run) -> CharacterSelect -> Exploration <-> Exploration
//!       -> CharacterSelect (tutorial seen)                         -> Finale -> Letter
//! ```
mod dialog;
mod hud;
mod input;
mod menu;
mod screen;

pub use dialog::{DialogAdvance, DialogBox, DialogFollowUp};
pub use hud::HudView;
pub use input::InputEvent;
pub use menu::ChoiceMenu;
pub use screen::{CharacterSelect, Exploration, FinaleView, LetterView, Screen};

use std::collections::VecDeque;

use game_content::Content;
use game_core::{
    AudioCue, DialogLine, FlagName, GameConfig, GameEngine, GameError, GateDecision,
    InteractionOutcome, InteractionResolver, MoveIntent, ProgressAction, ProgressState, SceneId,
    SceneOracle, WorldData, evaluate_exit, step,
};

use crate::api::{Result, RuntimeError};
use crate::audio::AudioSink;
use crate::events::GameEvent;
use crate::repository::{SaveService, StateRepository};

/// A single play-through driven by queued input.
pub struct Session<R, A> {
    content: Content,
    saves: SaveService<R>,
    audio: A,
    state: ProgressState,
    screen: Screen,
    paused: bool,
    inputs: VecDeque<InputEvent>,
    events: VecDeque<GameEvent>,
    clock_ms: u64,
    letters_opened: usize,
}

impl<R: StateRepository, A: AudioSink> Session<R, A> {
    /// Loads the save, writes it back normalized, and opens the title screen.
    pub fn boot(content: Content, saves: SaveService<R>, audio: A) -> Result<Self> {
        let state = saves.load();
        saves.persist(&state)?;
        tracing::info!(
            scene = %state.current_scene,
            love = state.love_meter,
            memories = state.memory_count(),
            "Session booted"
        );

        let mut session = Self {
            content,
            saves,
            audio,
            state,
            screen: Screen::Title,
            paused: false,
            inputs: VecDeque::new(),
            events: VecDeque::new(),
            clock_ms: 0,
            letters_opened: 0,
        };
        session.emit(GameEvent::SceneEntered {
            scene: SceneId::title(),
        });
        Ok(session)
    }

    // ===== accessors =====

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn config(&self) -> &GameConfig {
        &self.content.config
    }

    pub fn saves(&self) -> &SaveService<R> {
        &self.saves
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Milliseconds of game time seen through ticks.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// World of the active exploration scene.
    pub fn world(&self) -> Option<&WorldData> {
        match &self.screen {
            Screen::Exploration(exploration) => self.content.scenes.world(&exploration.scene),
            _ => None,
        }
    }

    /// HUD values for the active exploration scene.
    pub fn hud(&self) -> Option<HudView> {
        let Screen::Exploration(exploration) = &self.screen else {
            return None;
        };
        let world = self.content.scenes.world(&exploration.scene)?;
        Some(HudView::compute(
            &exploration.scene,
            &world.label,
            &self.state,
        ))
    }

    /// Takes every event queued since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    // ===== input =====

    pub fn push(&mut self, input: InputEvent) {
        self.inputs.push_back(input);
    }

    /// Processes queued input in order. Returns how many events were handled.
    ///
    /// Stops at the first error; the remaining input stays queued.
    pub fn pump(&mut self) -> Result<usize> {
        let mut handled = 0;
        while let Some(input) = self.inputs.pop_front() {
            self.handle(input)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Processes a single input immediately.
    pub fn handle(&mut self, input: InputEvent) -> Result<()> {
        if self.paused {
            if matches!(input, InputEvent::Pause | InputEvent::Accept) {
                self.paused = false;
                tracing::debug!("Resumed");
            }
            return Ok(());
        }

        match input {
            InputEvent::Tick { elapsed_ms } => {
                self.tick(elapsed_ms);
                return Ok(());
            }
            InputEvent::Pause => {
                if matches!(self.screen, Screen::Exploration(_) | Screen::Finale(_)) {
                    self.paused = true;
                    tracing::debug!(scene = %self.screen.scene(), "Paused");
                }
                return Ok(());
            }
            _ => {}
        }

        match self.screen {
            Screen::Title => self.on_title(input),
            Screen::Tutorial => self.on_tutorial(input),
            Screen::CharacterSelect(_) => self.on_character_select(input),
            Screen::Exploration(_) => self.on_exploration(input),
            Screen::Finale(_) => self.on_finale(input),
        }
    }

    fn tick(&mut self, elapsed_ms: u64) {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms);
        let char_ms = self.content.config.dialog_char_ms;
        if let Some(dialog) = self.screen.dialog_mut() {
            for _ in 0..dialog.tick(elapsed_ms, char_ms) {
                self.audio.play(AudioCue::TypeTick);
            }
        }
    }

    // ===== title, tutorial, character select =====

    fn on_title(&mut self, input: InputEvent) -> Result<()> {
        if input != InputEvent::Accept {
            return Ok(());
        }
        self.audio.play(AudioCue::Confirm);

        let tutorial_seen = self.state.flags.tutorial_seen;
        self.state.reset().flags.tutorial_seen = tutorial_seen;
        self.saves.persist(&self.state)?;
        tracing::info!(tutorial_seen, "New play-through started");

        if tutorial_seen {
            self.show(Screen::CharacterSelect(CharacterSelect::default()));
        } else {
            self.show(Screen::Tutorial);
        }
        Ok(())
    }

    fn on_tutorial(&mut self, input: InputEvent) -> Result<()> {
        if input != InputEvent::Accept {
            return Ok(());
        }
        self.audio.play(AudioCue::Confirm);

        self.state.reset();
        let start = self.content.story.start_scene.clone();
        let mut engine = GameEngine::new(&mut self.state, &self.content.config);
        engine.execute(&ProgressAction::unlock_flag(FlagName::TutorialSeen, 0))?;
        engine.execute(&ProgressAction::enter_scene(start))?;
        self.saves.persist(&self.state)?;

        self.show(Screen::CharacterSelect(CharacterSelect::default()));
        Ok(())
    }

    fn on_character_select(&mut self, input: InputEvent) -> Result<()> {
        let Screen::CharacterSelect(select) = &mut self.screen else {
            return Ok(());
        };
        let options = &self.content.story.character_select.options;

        match input {
            InputEvent::Left | InputEvent::Right if !options.is_empty() => {
                let count = options.len();
                select.selected = if input == InputEvent::Left {
                    (select.selected + count - 1) % count
                } else {
                    (select.selected + 1) % count
                };
                select.warning = None;
                Ok(())
            }
            InputEvent::Accept => {
                let option = options
                    .get(select.selected)
                    .ok_or(RuntimeError::MissingCharacterOption(select.selected))?;
                if let Some(warning) = &option.locked {
                    select.warning = Some(warning.clone());
                    return Ok(());
                }

                let character = option.character;
                let start = self.content.story.start_scene.clone();
                self.state.selected_character = Some(character);
                self.audio.play(AudioCue::Confirm);
                tracing::info!(character = character.as_ref(), "Character selected");

                self.enter_scene(start)
            }
            _ => Ok(()),
        }
    }

    // ===== exploration =====

    /// Records `scene` as current, then arrives there.
    fn enter_scene(&mut self, scene: SceneId) -> Result<()> {
        GameEngine::new(&mut self.state, &self.content.config)
            .execute(&ProgressAction::enter_scene(scene.clone()))?;
        self.arrive(scene)
    }

    /// Saves the already recorded `scene` once and shows it at its spawn,
    /// or starts the finale.
    fn arrive(&mut self, scene: SceneId) -> Result<()> {
        if scene == self.content.story.finale.scene {
            self.saves.persist(&self.state)?;
            self.enter_finale();
            return Ok(());
        }

        let spawn = self
            .content
            .scenes
            .world(&scene)
            .map(|world| world.spawn)
            .ok_or_else(|| RuntimeError::UnknownScene(scene.clone()))?;
        self.saves.persist(&self.state)?;
        tracing::info!(scene = %scene, "Entered scene");

        self.show(Screen::Exploration(Exploration::new(scene, spawn)));
        Ok(())
    }

    fn on_exploration(&mut self, input: InputEvent) -> Result<()> {
        match input {
            InputEvent::Accept => self.exploration_accept(),
            InputEvent::Move(intent) => self.exploration_move(intent),
            InputEvent::Up | InputEvent::Down => {
                if let Screen::Exploration(exploration) = &mut self.screen
                    && exploration.dialog.is_none()
                    && let Some(menu) = exploration.menu.as_mut()
                {
                    menu.move_by(if input == InputEvent::Up { -1 } else { 1 });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn exploration_accept(&mut self) -> Result<()> {
        let Screen::Exploration(exploration) = &mut self.screen else {
            return Ok(());
        };

        if let Some(dialog) = exploration.dialog.as_mut() {
            match dialog.advance() {
                DialogAdvance::Revealed => {}
                DialogAdvance::Next => {
                    if let Some(line) = dialog.current() {
                        self.events.push_back(GameEvent::DialogLine(line.clone()));
                    }
                }
                DialogAdvance::Finished(follow_up) => {
                    exploration.dialog = None;
                    if let DialogFollowUp::Choice(choice) = follow_up {
                        exploration.menu = ChoiceMenu::open(choice);
                    }
                }
            }
            return Ok(());
        }

        let menu = exploration.menu.take();
        let player = exploration.player;
        let scene = exploration.scene.clone();
        let world = self
            .content
            .scenes
            .world(&scene)
            .ok_or_else(|| RuntimeError::UnknownScene(scene.clone()))?;
        let resolver = InteractionResolver::new(world, &self.content.story.phrases);
        let mut engine = GameEngine::new(&mut self.state, &self.content.config);

        let outcome = match menu {
            Some(menu) => {
                self.audio.play(AudioCue::Confirm);
                let (key, value) = menu.confirm();
                match resolver.resolve_choice(&mut engine, key, &value) {
                    Ok(outcome) => Some(outcome),
                    Err(err) => {
                        tracing::debug!(
                            error = %err,
                            code = err.error_code(),
                            "Ignored encounter choice"
                        );
                        None
                    }
                }
            }
            None => resolver.interact(&mut engine, player)?,
        };

        match outcome {
            Some(outcome) => self.apply_outcome(outcome),
            None => Ok(()),
        }
    }

    fn apply_outcome(&mut self, outcome: InteractionOutcome) -> Result<()> {
        let InteractionOutcome {
            lines,
            choice,
            cues,
            delta,
        } = outcome;

        for cue in cues {
            self.audio.play(cue);
        }
        if delta.affects_progress() {
            self.saves.persist(&self.state)?;
            tracing::info!(
                love = self.state.love_meter,
                memories = self.state.memory_count(),
                encounters = self.state.encounter_count(),
                "Progress changed"
            );
            self.events.push_back(GameEvent::ProgressChanged(delta));
        }

        let Screen::Exploration(exploration) = &mut self.screen else {
            return Ok(());
        };
        if lines.is_empty() {
            exploration.menu = choice.and_then(ChoiceMenu::open);
            return Ok(());
        }

        let follow_up = choice.map_or(DialogFollowUp::None, DialogFollowUp::Choice);
        let dialog = DialogBox::new(lines, follow_up);
        if let Some(line) = dialog.current() {
            self.events.push_back(GameEvent::DialogLine(line.clone()));
        }
        exploration.dialog = Some(dialog);
        Ok(())
    }

    fn exploration_move(&mut self, intent: MoveIntent) -> Result<()> {
        let Screen::Exploration(exploration) = &mut self.screen else {
            return Ok(());
        };
        let config = &self.content.config;
        let now = self.clock_ms;

        if exploration.is_busy() {
            return Ok(());
        }
        if exploration
            .last_move_ms
            .is_some_and(|last| now.saturating_sub(last) < config.move_interval_ms)
        {
            return Ok(());
        }

        let world = self
            .content
            .scenes
            .world(&exploration.scene)
            .ok_or_else(|| RuntimeError::UnknownScene(exploration.scene.clone()))?;
        let destination = match step(&world.grid, exploration.player, intent) {
            Ok(destination) => destination,
            Err(err) => {
                tracing::trace!(error = %err, "Move rejected");
                return Ok(());
            }
        };

        exploration.player = destination;
        exploration.last_move_ms = Some(now);
        if exploration
            .last_step_cue_ms
            .is_none_or(|last| now.saturating_sub(last) > config.step_interval_ms)
        {
            self.audio.play(AudioCue::Step);
            exploration.last_step_cue_ms = Some(now);
        }

        let Some(exit) = world.exit_at(destination) else {
            return Ok(());
        };
        let mut engine = GameEngine::new(&mut self.state, config);
        match evaluate_exit(&mut engine, world, exit)? {
            GateDecision::Locked { message, respawn } => {
                tracing::debug!(to = %exit.to, "Exit locked");
                exploration.player = respawn;
                let line = DialogLine::new(&self.content.story.phrases.system_speaker, &message);
                self.events.push_back(GameEvent::ExitLocked { message });
                exploration.dialog = Some(DialogBox::new(vec![line], DialogFollowUp::None));
                Ok(())
            }
            GateDecision::Open { destination } => {
                self.audio.play(AudioCue::Confirm);
                self.arrive(destination)
            }
        }
    }

    // ===== finale =====

    fn enter_finale(&mut self) {
        let finale = &self.content.story.finale;
        let dialog = DialogBox::new(finale.dialog.iter().cloned(), DialogFollowUp::CompleteStory);
        let first = dialog.current().cloned();
        let view = FinaleView {
            scene: finale.scene.clone(),
            dialog: Some(dialog),
            ready_for_letter: false,
            letter: None,
        };
        tracing::info!(scene = %view.scene, "Finale started");

        self.show(Screen::Finale(view));
        if let Some(line) = first {
            self.emit(GameEvent::DialogLine(line));
        }
    }

    fn on_finale(&mut self, input: InputEvent) -> Result<()> {
        if input != InputEvent::Accept {
            return Ok(());
        }
        let Screen::Finale(view) = &mut self.screen else {
            return Ok(());
        };

        if let Some(dialog) = view.dialog.as_mut() {
            match dialog.advance() {
                DialogAdvance::Revealed => {}
                DialogAdvance::Next => {
                    if let Some(line) = dialog.current() {
                        self.events.push_back(GameEvent::DialogLine(line.clone()));
                    }
                }
                DialogAdvance::Finished(_) => {
                    view.dialog = None;
                    view.ready_for_letter = true;
                    let delta = GameEngine::new(&mut self.state, &self.content.config)
                        .execute(&ProgressAction::complete_story(view.scene.clone()))?;
                    self.saves.persist(&self.state)?;
                    self.audio.play(AudioCue::Fanfare);
                    tracing::info!("Story completed");
                    if delta.affects_progress() {
                        self.events.push_back(GameEvent::ProgressChanged(delta));
                    }
                    self.events.push_back(GameEvent::StoryCompleted);
                }
            }
            return Ok(());
        }

        if view.letter.is_some() {
            tracing::debug!("Replaying finale");
            self.enter_finale();
            return Ok(());
        }

        if view.ready_for_letter {
            self.audio.play(AudioCue::Confirm);
            let joke = self
                .content
                .story
                .letter
                .joke(self.letters_opened)
                .unwrap_or_default()
                .to_owned();
            self.letters_opened += 1;
            view.letter = Some(LetterView { joke: joke.clone() });
            self.events.push_back(GameEvent::LetterOpened { joke });
        }
        Ok(())
    }

    // ===== helpers =====

    fn show(&mut self, screen: Screen) {
        let scene = screen.scene();
        self.screen = screen;
        self.emit(GameEvent::SceneEntered { scene });
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}
