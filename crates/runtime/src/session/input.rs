//! Frontend-neutral input events.
use game_core::MoveIntent;

/// One discrete input delivered to the session.
///
/// Frontends translate their key events into these and push them onto the
/// session queue; elapsed time arrives as [`InputEvent::Tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Held movement directions.
    Move(MoveIntent),
    /// E or Enter: advance dialog, confirm a menu, or interact.
    Accept,
    Up,
    Down,
    Left,
    Right,
    /// Esc: toggle pause.
    Pause,
    /// Wall-clock time passed since the previous tick.
    Tick { elapsed_ms: u64 },
}
