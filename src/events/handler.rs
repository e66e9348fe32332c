//! Event handler implementation.
//!
//! Polls for terminal events and converts them to application events.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;

/// The tick rate for the event loop in milliseconds.
const TICK_RATE_MS: u64 = 100;

/// Handles application events by polling crossterm for terminal events.
pub struct EventHandler {
    /// The tick rate duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the default tick rate.
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(TICK_RATE_MS),
        }
    }

    /// Poll for the next event.
    ///
    /// This method blocks until an event is available or the tick rate elapses.
    /// Returns `Event::Tick` if no event occurred within the tick rate.
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(convert(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a crossterm event onto an application event.
fn convert(event: CrosstermEvent) -> Event {
    match event {
        // Key release and repeat reports only arrive with enhanced keyboard flags
        CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            Event::Key(key_event)
        }
        CrosstermEvent::Key(_) => Event::Tick,
        CrosstermEvent::Mouse(mouse_event) => Event::Mouse(mouse_event),
        CrosstermEvent::Paste(text) => Event::Paste(text),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        // Focus events are not currently handled
        CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => Event::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_event_handler_new() {
        let handler = EventHandler::new();
        assert_eq!(handler.tick_rate, Duration::from_millis(TICK_RATE_MS));
    }

    #[test]
    fn test_key_press_is_forwarded() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(convert(CrosstermEvent::Key(key)), Event::Key(key));
    }

    #[test]
    fn test_key_release_is_dropped() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(convert(CrosstermEvent::Key(key)), Event::Tick);
    }

    #[test]
    fn test_paste_and_resize() {
        assert_eq!(
            convert(CrosstermEvent::Paste("abc".to_string())),
            Event::Paste("abc".to_string())
        );
        assert_eq!(convert(CrosstermEvent::Resize(80, 24)), Event::Resize(80, 24));
    }
}
