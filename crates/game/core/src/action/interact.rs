//! Nearest-entity interaction.
//!
//! The resolver picks the closest interactable entity within range of the
//! player and turns it into dialog lines, sound cues and, for memories,
//! encounters and unlocking talkers, a progress action executed through the
//! engine. Encounters stop halfway with a [`PendingChoice`]; the selected
//! option comes back through [`InteractionResolver::resolve_choice`].
use crate::action::{AudioCue, DialogLine, ProgressAction};
use crate::config::GameConfig;
use crate::engine::{ExecuteError, GameEngine};
use crate::env::{EncounterSpot, MemorySpot, Phrasebook, Sign, Talker, TalkerVariant, WorldData};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Character, EncounterKey, Position, ProgressDelta};

/// An entity close enough to interact with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interactable<'w> {
    Talker(&'w Talker),
    Memory(&'w MemorySpot),
    Encounter(&'w EncounterSpot),
    Sign(&'w Sign),
}

impl Interactable<'_> {
    pub fn position(&self) -> Position {
        match self {
            Self::Talker(talker) => talker.position,
            Self::Memory(memory) => memory.position,
            Self::Encounter(encounter) => encounter.position,
            Self::Sign(sign) => sign.position,
        }
    }
}

/// One entry of an encounter menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub value: String,
}

/// Encounter menu to open once the intro dialog finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingChoice {
    pub key: EncounterKey,
    pub title: String,
    pub options: Vec<ChoiceOption>,
}

/// Everything one interaction produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionOutcome {
    pub lines: Vec<DialogLine>,
    pub choice: Option<PendingChoice>,
    pub cues: Vec<AudioCue>,
    pub delta: ProgressDelta,
}

impl InteractionOutcome {
    fn say(lines: Vec<DialogLine>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    /// Returns true when the caller must persist progress.
    pub fn progress_changed(&self) -> bool {
        self.delta.affects_progress()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    #[error("encounter {0} is not part of this scene")]
    UnknownEncounter(EncounterKey),

    #[error("encounter {key} has no option '{value}'")]
    UnknownOption { key: EncounterKey, value: String },

    #[error("encounter {0} already resolved")]
    AlreadyResolved(EncounterKey),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

impl GameError for ChoiceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownEncounter(_) => ErrorSeverity::Internal,
            Self::UnknownOption { .. } | Self::AlreadyResolved(_) => ErrorSeverity::Validation,
            Self::Execute(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEncounter(_) => "CHOICE_UNKNOWN_ENCOUNTER",
            Self::UnknownOption { .. } => "CHOICE_UNKNOWN_OPTION",
            Self::AlreadyResolved(_) => "CHOICE_ALREADY_RESOLVED",
            Self::Execute(inner) => inner.error_code(),
        }
    }
}

/// Resolves interactions against one scene's content.
#[derive(Clone, Copy, Debug)]
pub struct InteractionResolver<'w> {
    world: &'w WorldData,
    phrases: &'w Phrasebook,
}

impl<'w> InteractionResolver<'w> {
    pub fn new(world: &'w WorldData, phrases: &'w Phrasebook) -> Self {
        Self { world, phrases }
    }

    /// Finds the strictly nearest entity within `config.interact_range`.
    ///
    /// Distances are compared in tile units. Equal distances keep the first
    /// candidate in talker, memory, encounter, sign order.
    pub fn nearest(&self, player: Position, config: &GameConfig) -> Option<Interactable<'w>> {
        let world = self.world;
        let candidates = world
            .talkers
            .iter()
            .map(Interactable::Talker)
            .chain(world.memories.iter().map(Interactable::Memory))
            .chain(world.encounters.iter().map(Interactable::Encounter))
            .chain(world.signs.iter().map(Interactable::Sign));

        let range = config.interact_range_tiles();
        let mut best: Option<(f32, Interactable<'w>)> = None;
        for candidate in candidates {
            let distance = player.distance(candidate.position());
            if distance > range {
                continue;
            }
            if best.is_none_or(|(nearest, _)| distance < nearest) {
                best = Some((distance, candidate));
            }
        }
        best.map(|(_, candidate)| candidate)
    }

    /// Interacts with the nearest entity. Returns `None` when nothing is in range.
    pub fn interact(
        &self,
        engine: &mut GameEngine<'_>,
        player: Position,
    ) -> Result<Option<InteractionOutcome>, ExecuteError> {
        let Some(target) = self.nearest(player, engine.config()) else {
            return Ok(None);
        };

        let outcome = match target {
            Interactable::Talker(talker) => self.talk(engine, talker)?,
            Interactable::Sign(sign) => InteractionOutcome::say(
                sign.lines
                    .iter()
                    .map(|line| DialogLine::new(&self.phrases.sign_speaker, line))
                    .collect(),
            ),
            Interactable::Memory(memory) => self.collect(engine, memory)?,
            Interactable::Encounter(encounter) => self.open_encounter(engine, encounter),
        };
        Ok(Some(outcome))
    }

    fn talk(
        &self,
        engine: &mut GameEngine<'_>,
        talker: &Talker,
    ) -> Result<InteractionOutcome, ExecuteError> {
        let say = |text: &str| DialogLine::new(&talker.name, text);
        let all_lines = || talker.lines.iter().map(|line| say(line)).collect();

        match &talker.variant {
            None => Ok(InteractionOutcome::say(all_lines())),
            Some(TalkerVariant::PerCharacter {
                template,
                her,
                other,
            }) => {
                let name = match engine.state().selected_character {
                    Some(Character::Her) => her,
                    _ => other,
                };
                Ok(InteractionOutcome::say(vec![say(
                    &template.replace("{name}", name),
                )]))
            }
            Some(TalkerVariant::Unlock { flag, bonus }) => {
                let mut outcome = InteractionOutcome::say(all_lines());
                if !engine.state().flag(*flag) {
                    outcome.delta = engine.execute(&ProgressAction::unlock_flag(*flag, *bonus))?;
                    outcome.cues.push(AudioCue::Fanfare);
                }
                Ok(outcome)
            }
        }
    }

    fn collect(
        &self,
        engine: &mut GameEngine<'_>,
        memory: &MemorySpot,
    ) -> Result<InteractionOutcome, ExecuteError> {
        let state = engine.state();
        if state.has_memory(&memory.id) || state.memory_count() >= GameConfig::MAX_MEMORIES {
            return Ok(InteractionOutcome::say(vec![DialogLine::new(
                &self.phrases.system_speaker,
                &self.phrases.memory_already_collected,
            )]));
        }

        let delta = engine.execute(&ProgressAction::collect_memory(memory.id.clone()))?;
        Ok(InteractionOutcome {
            lines: vec![DialogLine::new(
                &self.phrases.memory_speaker,
                &memory.description,
            )],
            choice: None,
            cues: vec![AudioCue::Fanfare],
            delta,
        })
    }

    fn open_encounter(
        &self,
        engine: &GameEngine<'_>,
        encounter: &EncounterSpot,
    ) -> InteractionOutcome {
        if engine.state().is_solved(encounter.key) {
            return InteractionOutcome::say(vec![DialogLine::new(
                &encounter.title,
                &self.phrases.encounter_already_resolved,
            )]);
        }

        let mut outcome = InteractionOutcome::say(vec![
            DialogLine::new(&encounter.title, &encounter.intro),
            DialogLine::new(&self.phrases.player_name, &self.phrases.encounter_reply),
        ]);
        outcome.choice = Some(PendingChoice {
            key: encounter.key,
            title: encounter.title.clone(),
            options: encounter
                .options
                .iter()
                .map(|option| ChoiceOption {
                    label: option.label.clone(),
                    value: option.value.clone(),
                })
                .collect(),
        });
        outcome
    }

    /// Applies the option picked from an encounter menu.
    pub fn resolve_choice(
        &self,
        engine: &mut GameEngine<'_>,
        key: EncounterKey,
        value: &str,
    ) -> Result<InteractionOutcome, ChoiceError> {
        let encounter = self
            .world
            .encounter(key)
            .ok_or(ChoiceError::UnknownEncounter(key))?;
        let option = encounter
            .option(value)
            .ok_or_else(|| ChoiceError::UnknownOption {
                key,
                value: value.to_owned(),
            })?;
        if engine.state().is_solved(key) {
            return Err(ChoiceError::AlreadyResolved(key));
        }

        let delta = engine.execute(&ProgressAction::resolve_encounter(key, option.bonus))?;
        Ok(InteractionOutcome {
            lines: vec![
                DialogLine::new(&encounter.title, &option.response),
                DialogLine::new(
                    &self.phrases.system_speaker,
                    self.phrases.love_gain(option.bonus),
                ),
            ],
            choice: None,
            cues: Vec::new(),
            delta,
        })
    }
}
