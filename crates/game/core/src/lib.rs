//! Deterministic story rules and data types shared across crates.
//!
//! `game-core` defines the canonical progress record, the scene content
//! model, and the pure rules that read and advance them: interaction
//! resolution, exit gating, grid movement and objective text. All progress
//! mutation flows through [`engine::GameEngine`]; nothing here performs I/O.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod objective;
pub mod state;

pub use action::{
    AudioCue, CardinalDirection, ChoiceError, ChoiceOption, DialogLine, GateDecision,
    Interactable, InteractionOutcome, InteractionResolver, MoveError, MoveIntent, PendingChoice,
    ProgressAction, ProgressError, ProgressTransition, evaluate_exit, exit_at, lock_reason, step,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{
    EncounterOption, EncounterSpot, Exit, ExitRequirements, MemorySpot, Phrasebook, SceneOracle,
    Sign, Talker, TalkerVariant, TerrainKind, TileGrid, WorldData,
};
pub use error::{ErrorSeverity, GameError};
pub use objective::objective_text;
pub use state::{
    Character, EncounterKey, FlagName, MemoryId, Position, ProgressDelta, ProgressFlags,
    ProgressState, SceneId, TileRect,
};
