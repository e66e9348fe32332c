//! tagbox - a tag input widget for ratatui.
//!
//! [`TagInput`] lets a user type a query, pick from prefix-filtered
//! suggestions and build an ordered list of tags with the keyboard or mouse.
//! The widget never owns the tag list: it reports [`TagInputAction`]s and the
//! caller applies them.
//!
//! ```
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use tagbox::{Suggestion, TagInput, TagInputAction};
//!
//! let mut input = TagInput::default();
//! input.set_suggestions(vec![Suggestion::new("Apple"), Suggestion::new("Banana")]);
//!
//! input.handle_input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
//! input.handle_input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
//! let outcome = input.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
//!
//! assert!(matches!(outcome.action, Some(TagInputAction::Add(tag)) if tag.name == "Apple"));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod tags;
pub mod tasks;
pub mod ui;

pub use tags::{filter_suggestions, Suggestion, Tag};
pub use ui::{InputOutcome, TagInput, TagInputAction, TagInputConfig, Theme};
