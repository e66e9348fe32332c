//! Busy indicator shown next to the query field.
//!
//! Owners set the widget busy while an external suggestion lookup is in
//! flight; the spinner advances on each tick.

use serde::{Deserialize, Serialize};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Alternative spinner using simple characters for compatibility.
const SIMPLE_SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// The type of spinner to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerStyle {
    /// Braille dots spinner (default).
    #[default]
    Braille,
    /// Simple ASCII spinner for compatibility.
    Simple,
}

impl SpinnerStyle {
    /// Get the frames for this spinner style.
    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Braille => SPINNER_FRAMES,
            SpinnerStyle::Simple => SIMPLE_SPINNER_FRAMES,
        }
    }
}

/// A one-cell inline spinner.
#[derive(Debug, Clone, Default)]
pub struct BusyIndicator {
    /// Current spinner frame index.
    spinner_state: usize,
    /// The spinner style.
    style: SpinnerStyle,
    /// Whether the spinner is active.
    active: bool,
}

impl BusyIndicator {
    /// Create an inactive indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spinner style.
    pub fn with_style(mut self, style: SpinnerStyle) -> Self {
        self.style = style;
        self
    }

    /// Turn the spinner on or off. Turning it on restarts the animation.
    pub fn set_active(&mut self, active: bool) {
        if active && !self.active {
            self.spinner_state = 0;
        }
        self.active = active;
    }

    /// Check if active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the animation.
    pub fn tick(&mut self) {
        if self.active {
            self.spinner_state = (self.spinner_state + 1) % self.style.frames().len();
        }
    }

    /// Get the current frame, or a blank cell if not active.
    pub fn frame(&self) -> &'static str {
        if self.active {
            self.style.frames()[self.spinner_state]
        } else {
            " "
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_style_frames() {
        assert_eq!(SpinnerStyle::Braille.frames().len(), 10);
        assert_eq!(SpinnerStyle::Simple.frames().len(), 4);
    }

    #[test]
    fn test_inactive_frame_is_blank() {
        let indicator = BusyIndicator::new();
        assert!(!indicator.is_active());
        assert_eq!(indicator.frame(), " ");
    }

    #[test]
    fn test_tick_inactive_does_not_advance() {
        let mut indicator = BusyIndicator::new();
        indicator.tick();
        assert_eq!(indicator.spinner_state, 0);
    }

    #[test]
    fn test_tick_wraps() {
        let mut indicator = BusyIndicator::new().with_style(SpinnerStyle::Simple);
        indicator.set_active(true);
        let first = indicator.frame();

        indicator.tick();
        assert_ne!(indicator.frame(), first);

        for _ in 1..SIMPLE_SPINNER_FRAMES.len() {
            indicator.tick();
        }
        assert_eq!(indicator.frame(), first);
    }

    #[test]
    fn test_reactivation_restarts() {
        let mut indicator = BusyIndicator::new();
        indicator.set_active(true);
        indicator.tick();
        indicator.set_active(false);
        indicator.set_active(true);
        assert_eq!(indicator.spinner_state, 0);
    }
}
