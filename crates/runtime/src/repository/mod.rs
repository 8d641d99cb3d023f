//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during play: the single progress
//! record written after every progression change. Static story content is
//! owned by `game-content`, not by repositories.
//!
//! [`StateRepository`] is a plain durable key-value store. [`SaveService`]
//! binds it to the save key and owns the JSON codec that turns whatever is
//! stored there back into a valid [`game_core::ProgressState`].

mod error;
mod file;
mod memory;
mod save;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use save::{SAVE_KEY, SaveService, decode_save, encode_save};
pub use traits::StateRepository;
