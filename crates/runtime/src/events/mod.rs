//! Events emitted by the session for the frontend.
//!
//! The session queues events as it processes input; the frontend drains them
//! once per frame to update its message log and presentation.

mod game_event;

pub use game_event::GameEvent;
