//! Fire-and-forget sound output.
//!
//! Game logic only names a [`AudioCue`]; what a cue sounds like, and whether
//! it sounds at all, is up to the sink. Sinks never report failures back.
use game_core::AudioCue;

/// Plays sound cues requested by the session.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Records cues in order. Handy for headless runs and tests.
impl AudioSink for Vec<AudioCue> {
    fn play(&mut self, cue: AudioCue) {
        self.push(cue);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play(&mut self, cue: AudioCue) {
        (**self).play(cue);
    }
}
