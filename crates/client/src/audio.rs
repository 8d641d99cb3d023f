//! Terminal sound output.
use std::io::{self, Write};

use game_core::AudioCue;
use runtime::AudioSink;

/// Rings the terminal bell for the fanfare; other cues are too frequent for
/// a bell and stay silent.
#[derive(Clone, Copy, Debug)]
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: AudioCue) {
        if !self.enabled || cue != AudioCue::Fanfare {
            return;
        }
        let mut stdout = io::stdout();
        if let Err(err) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            tracing::debug!(error = %err, "terminal bell failed");
        }
    }
}
