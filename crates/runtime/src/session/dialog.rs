//! Typewriter dialog box.
//!
//! A [`DialogBox`] shows a queue of attributed lines one at a time. Each
//! line is revealed a character at a time as ticks arrive; Accept either
//! completes the line being typed or moves to the next one. When the queue
//! runs dry the box hands back its [`DialogFollowUp`].
use std::collections::VecDeque;

use game_core::{DialogLine, PendingChoice};

/// What happens once the last line is dismissed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogFollowUp {
    #[default]
    None,
    /// Open the encounter menu.
    Choice(PendingChoice),
    /// Record the finale as seen.
    CompleteStory,
}

/// Result of pressing Accept on an open dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogAdvance {
    /// The current line was still typing and is now fully shown.
    Revealed,
    /// The next queued line started typing.
    Next,
    /// The queue is exhausted; the box should close.
    Finished(DialogFollowUp),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogBox {
    current: Option<DialogLine>,
    queue: VecDeque<DialogLine>,
    /// Characters of `current` shown so far.
    revealed: usize,
    /// Milliseconds accumulated toward the next character.
    carry_ms: u64,
    follow_up: DialogFollowUp,
}

impl DialogBox {
    pub fn new(lines: impl IntoIterator<Item = DialogLine>, follow_up: DialogFollowUp) -> Self {
        let mut queue: VecDeque<DialogLine> = lines.into_iter().collect();
        Self {
            current: queue.pop_front(),
            queue,
            revealed: 0,
            carry_ms: 0,
            follow_up,
        }
    }

    /// Line being shown, or `None` for a box created without lines.
    pub fn current(&self) -> Option<&DialogLine> {
        self.current.as_ref()
    }

    /// Lines still waiting after the current one.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn follow_up(&self) -> &DialogFollowUp {
        &self.follow_up
    }

    /// Portion of the current line revealed so far.
    pub fn visible_text(&self) -> &str {
        let Some(line) = &self.current else {
            return "";
        };
        match line.text.char_indices().nth(self.revealed) {
            Some((end, _)) => &line.text[..end],
            None => &line.text,
        }
    }

    pub fn is_line_complete(&self) -> bool {
        self.current
            .as_ref()
            .is_none_or(|line| self.revealed >= line.text.chars().count())
    }

    /// Advances the typewriter by `elapsed_ms`.
    ///
    /// Returns how many type ticks to sound: one for every second character
    /// revealed. A `char_ms` of zero reveals the whole line silently.
    pub fn tick(&mut self, elapsed_ms: u64, char_ms: u64) -> usize {
        let Some(line) = &self.current else {
            return 0;
        };
        let total = line.text.chars().count();
        if self.revealed >= total {
            return 0;
        }
        if char_ms == 0 {
            self.revealed = total;
            return 0;
        }

        self.carry_ms += elapsed_ms;
        let steps = usize::try_from(self.carry_ms / char_ms).unwrap_or(usize::MAX);
        self.carry_ms %= char_ms;

        let before = self.revealed;
        self.revealed = before.saturating_add(steps).min(total);
        (before + 1..=self.revealed).filter(|n| n % 2 == 0).count()
    }

    /// Handles Accept.
    pub fn advance(&mut self) -> DialogAdvance {
        if !self.is_line_complete() {
            self.revealed = self
                .current
                .as_ref()
                .map_or(0, |line| line.text.chars().count());
            self.carry_ms = 0;
            return DialogAdvance::Revealed;
        }

        self.revealed = 0;
        self.carry_ms = 0;
        self.current = self.queue.pop_front();
        match self.current {
            Some(_) => DialogAdvance::Next,
            None => DialogAdvance::Finished(std::mem::take(&mut self.follow_up)),
        }
    }
}
