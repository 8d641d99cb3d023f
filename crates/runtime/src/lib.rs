//! Runtime orchestration for a play-through.
//!
//! This crate wires the deterministic rules of `game-core` and the content of
//! `game-content` into a single-threaded session that frontends drive with
//! input events.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the scene flow controller and its dialog/menu models
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] carries what happened back to the frontend
//! - [`audio`] abstracts sound output behind fire-and-forget cues
//! - [`repository`] persists the progress record
pub mod api;
pub mod audio;
pub mod events;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use audio::{AudioSink, SilentAudio};
pub use events::GameEvent;
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, SAVE_KEY, SaveService,
    StateRepository, decode_save, encode_save,
};
pub use session::{
    CharacterSelect, ChoiceMenu, DialogAdvance, DialogBox, DialogFollowUp, Exploration,
    FinaleView, HudView, InputEvent, LetterView, Screen, Session,
};
