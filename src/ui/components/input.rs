//! Query text field.
//!
//! This module provides the single-line text field used for the tag query:
//! - Character input and deletion
//! - Cursor movement (left/right, home/end)
//! - Readline-style shortcuts (Ctrl+A/E/U/W)
//!
//! The cursor is tracked in characters, so multi-byte input never splits a
//! UTF-8 sequence.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// A borderless single-line text field.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    /// The current input value.
    value: String,
    /// Cursor position, in characters.
    cursor: usize,
}

impl QueryInput {
    /// Create a new empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field with an initial value, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_value(value);
        input
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    /// Clear the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Check if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text before the cursor, clamped to `u16::MAX`.
    pub fn cursor_offset(&self) -> u16 {
        let before = &self.value[..self.byte_index(self.cursor)];
        cell_width(before)
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the given character position.
    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => {
                self.cursor = self.char_count();
                false
            }
            // Ctrl+U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if self.value.is_empty() {
                    return false;
                }
                self.clear();
                true
            }
            // Ctrl+W - delete word before cursor
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                if self.cursor == 0 {
                    return false;
                }
                let end = self.byte_index(self.cursor);
                let before = self.value[..end].trim_end_matches(|c: char| !c.is_alphanumeric());
                let word_start = before
                    .rfind(|c: char| !c.is_alphanumeric())
                    .map(|i| i + before[i..].chars().next().map_or(1, char::len_utf8))
                    .unwrap_or(0);
                self.value.replace_range(word_start..end, "");
                self.cursor = self.value[..word_start].chars().count();
                true
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            (KeyCode::Backspace, _) => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Delete, _) => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                false
            }
            _ => false,
        }
    }

    /// Whether the key is one this field acts on, modified or not.
    pub fn is_editing_key(key: &KeyEvent) -> bool {
        matches!(
            (key.code, key.modifiers),
            (KeyCode::Char(_), KeyModifiers::NONE | KeyModifiers::SHIFT)
                | (KeyCode::Char('a' | 'e' | 'u' | 'w'), KeyModifiers::CONTROL)
                | (KeyCode::Backspace | KeyCode::Delete | KeyCode::Home | KeyCode::End, _)
                | (KeyCode::Left | KeyCode::Right, KeyModifiers::NONE)
        )
    }

    /// Render the field without decoration.
    ///
    /// Shows `placeholder` in `placeholder_style` while empty and places the
    /// terminal cursor when `focused`.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        placeholder: &str,
        styles: (Style, Style),
        focused: bool,
    ) {
        let (text_style, placeholder_style) = styles;
        let paragraph = if self.value.is_empty() {
            Paragraph::new(Span::styled(placeholder.to_string(), placeholder_style))
        } else {
            Paragraph::new(Span::styled(self.value.clone(), text_style))
        };
        frame.render_widget(paragraph, area);

        if focused && area.width > 0 {
            let cursor_x = area.x.saturating_add(self.cursor_offset());
            // Only show cursor if it's within the visible area
            if cursor_x < area.right() {
                frame.set_cursor_position(Position::new(cursor_x, area.y));
            }
        }
    }
}

/// Display width of `text` in terminal cells, clamped to `u16::MAX`.
pub fn cell_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}
