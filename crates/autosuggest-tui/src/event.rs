use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Events that the picker can handle.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press (or repeat) event.
    Key(KeyEvent),
    /// Pasted text, when bracketed paste is on.
    Paste(String),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Poll timeout; nothing happened.
    Tick,
}

/// Polls for terminal events with a configurable tick rate.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Block until the next event (key press, paste, resize, or tick timeout).
    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Release events only arrive with keyboard enhancement on;
                // the picker synthesizes its own keyup per press.
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    Ok(AppEvent::Key(key))
                }
                CrosstermEvent::Paste(text) => Ok(AppEvent::Paste(text)),
                CrosstermEvent::Resize(w, h) => Ok(AppEvent::Resize(w, h)),
                _ => Ok(AppEvent::Tick),
            }
        } else {
            Ok(AppEvent::Tick)
        }
    }
}
