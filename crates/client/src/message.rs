//! Scrollback of what happened during the play-through.
use std::collections::VecDeque;

use runtime::GameEvent;

/// Severity level for log entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    /// Session clock in milliseconds when the entry was recorded.
    pub timestamp: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, timestamp: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            timestamp,
            level,
        }
    }
}

/// Circular buffer of messages shown under the map.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records `event` if it has a log line. Returns whether anything was added.
    pub fn record(&mut self, event: &GameEvent, clock_ms: u64) -> bool {
        let level = match event {
            GameEvent::ExitLocked { .. } => MessageLevel::Warning,
            _ => MessageLevel::Info,
        };
        match event.log_line() {
            Some(text) => {
                self.push(MessageEntry::new(text, Some(clock_ms), level));
                true
            }
            None => false,
        }
    }

    /// Newest entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{DialogLine, SceneId};

    use super::*;

    #[test]
    fn drops_oldest_beyond_capacity() {
        let mut log = MessageLog::new(2);
        for text in ["a", "b", "c"] {
            log.push(MessageEntry::new(text, None, MessageLevel::Info));
        }

        let texts: Vec<_> = log.recent(5).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["c", "b"]);
    }

    #[test]
    fn records_only_loggable_events() {
        let mut log = MessageLog::new(8);
        assert!(log.record(
            &GameEvent::SceneEntered {
                scene: SceneId::new(SceneId::CITY)
            },
            10
        ));
        assert!(log.record(&GameEvent::DialogLine(DialogLine::new("Ana", "Hola")), 20));
        assert!(!log.record(&GameEvent::StoryCompleted, 30));

        assert_eq!(log.recent(10).count(), 2);
        let newest = log.recent(1).next().expect("entry");
        assert_eq!(newest.text, "Ana: Hola");
        assert_eq!(newest.timestamp, Some(20));
    }

    #[test]
    fn locked_exits_are_warnings() {
        let mut log = MessageLog::new(4);
        log.record(
            &GameEvent::ExitLocked {
                message: "Necesitas 6 recuerdos.".into(),
            },
            5,
        );
        let entry = log.recent(1).next().expect("entry");
        assert_eq!(entry.level, MessageLevel::Warning);
        assert_eq!(entry.text, "Necesitas 6 recuerdos.");
    }
}
