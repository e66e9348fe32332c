//! Event handling for the demo application.
//!
//! This module polls terminal input and names the keys used in
//! configuration files.

mod handler;
mod keys;

pub use handler::EventHandler;
pub use keys::{parse_key_name, KeyNameError};

use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal events delivered to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse button or wheel event.
    Mouse(MouseEvent),
    /// Pasted text (bracketed paste).
    Paste(String),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input within the tick rate.
    Tick,
}
