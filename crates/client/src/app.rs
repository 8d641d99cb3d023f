//! Main loop: keyboard in, ticks in, frames out.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use game_core::GameError;
use runtime::{AudioSink, InputEvent, Session, StateRepository};

use crate::config::UiConfig;
use crate::input::{InputHandler, KeyAction};
use crate::message::MessageLog;
use crate::terminal::Tui;
use crate::ui;

pub struct App<R, A> {
    session: Session<R, A>,
    messages: MessageLog,
    input: InputHandler,
    config: UiConfig,
}

impl<R: StateRepository, A: AudioSink> App<R, A> {
    pub fn new(session: Session<R, A>, config: UiConfig) -> Self {
        Self {
            session,
            messages: MessageLog::new(config.message_capacity),
            input: InputHandler::new(),
            config,
        }
    }

    /// Runs until the player quits.
    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let tick = Duration::from_millis(self.config.tick_ms);
        let mut last_tick = Instant::now();

        self.collect_events();
        ui::render(terminal, &self.session, &self.messages, &self.config)?;

        loop {
            let mut pending = Vec::new();
            if term_event::poll(tick)?
                && let TermEvent::Key(key) = term_event::read()?
                && key.kind == KeyEventKind::Press
            {
                match self.input.handle_key(key) {
                    KeyAction::Quit => {
                        tracing::info!("quit requested");
                        break;
                    }
                    KeyAction::Submit(inputs) => pending = inputs,
                    KeyAction::None => {}
                }
            }

            // Time first so movement throttling sees the current clock.
            let now = Instant::now();
            let elapsed_ms = u64::try_from(now.duration_since(last_tick).as_millis())
                .unwrap_or(u64::MAX);
            if elapsed_ms > 0 {
                last_tick = now;
                self.session.push(InputEvent::Tick { elapsed_ms });
            }
            for input in pending {
                self.session.push(input);
            }

            let pumped = self.session.pump();
            self.collect_events();
            if let Err(err) = pumped {
                tracing::error!(
                    error = %err,
                    code = err.error_code(),
                    severity = ?err.severity(),
                    "input failed"
                );
                return Err(err.into());
            }
            ui::render(terminal, &self.session, &self.messages, &self.config)?;
        }

        Ok(())
    }

    fn collect_events(&mut self) {
        let clock_ms = self.session.clock_ms();
        for event in self.session.drain_events() {
            tracing::debug!(?event, "game event");
            self.messages.record(&event, clock_ms);
        }
    }
}
