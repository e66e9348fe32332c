//! User interface components.
//!
//! This module contains the tag input widget and the smaller pieces it is
//! built from.

mod components;
pub mod theme;

pub use components::{
    chip_label, highlight_prefix, layout_chips, popup_area, render_suggestions, BusyIndicator,
    ChipLayout, InputOutcome, QueryInput, SpinnerStyle, TagInput, TagInputAction,
    TagInputConfig, DEFAULT_MIN_QUERY_LENGTH, DEFAULT_PLACEHOLDER,
};
pub use theme::Theme;
