//! Terminal event polling.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;

/// Terminal events the application reacts to.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Poll timeout, used to drain pending actions
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Poll-based event source.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Next event, or `Tick` when the poll times out.
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}
