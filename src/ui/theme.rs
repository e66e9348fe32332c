//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Colors and styles used by the tag input.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Chip background for enabled tags.
    pub chip: Color,
    /// Chip background for disabled tags.
    pub chip_disabled: Color,
    /// Border color while the widget has focus.
    pub focus: Color,
    /// Border color while unfocused.
    pub border: Color,
    /// Placeholder and disabled text.
    pub muted: Color,
    /// Background for the highlighted suggestion.
    pub highlight: Color,
    /// Color for the part of a suggestion matching the query.
    pub matched: Color,
    /// Busy spinner color.
    pub spinner: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            chip: Color::Blue,
            chip_disabled: Color::DarkGray,
            focus: Color::Yellow,
            border: Color::DarkGray,
            muted: Color::DarkGray,
            highlight: Color::DarkGray,
            matched: Color::Yellow,
            spinner: Color::Cyan,
        }
    }
}

impl Theme {
    /// Style for a tag chip.
    pub fn chip_style(&self, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(Color::Gray).bg(self.chip_disabled)
        } else {
            Style::default().fg(Color::White).bg(self.chip)
        }
    }

    /// Border style for the given focus state.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for the placeholder text.
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the highlighted suggestion row.
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the matched prefix of a suggestion.
    pub fn matched_style(&self) -> Style {
        Style::default()
            .fg(self.matched)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a suggestion that cannot be committed.
    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }
}
