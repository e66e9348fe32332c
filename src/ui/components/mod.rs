//! Reusable UI components.

mod chips;
mod input;
mod loading;
mod suggestions;
mod tag_input;

pub use chips::{chip_label, layout_chips, ChipLayout};
pub use input::QueryInput;
pub use loading::{BusyIndicator, SpinnerStyle};
pub use suggestions::{highlight_prefix, popup_area, render_suggestions};
pub use tag_input::{
    InputOutcome, TagInput, TagInputAction, TagInputConfig, DEFAULT_MIN_QUERY_LENGTH,
    DEFAULT_PLACEHOLDER,
};
