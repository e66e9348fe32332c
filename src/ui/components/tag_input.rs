//! Tag input component.
//!
//! A chip-based field that shows the current tags followed by a query field.
//! Typing filters the suggestion pool by prefix, the arrow keys cycle through
//! the matches and a delimiter key commits the highlighted one.
//!
//! The widget never changes the tag list itself. Every change is returned as
//! a [`TagInputAction`] and the owner is expected to apply it and hand the
//! updated lists back with [`TagInput::set_tags`] and
//! [`TagInput::set_suggestions`] before the next render.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, trace};

use super::chips::{chip_label, layout_chips};
use super::input::{cell_width, QueryInput};
use super::loading::{BusyIndicator, SpinnerStyle};
use super::suggestions::{popup_area, render_suggestions};
use crate::tags::{filter_suggestions, Suggestion, Tag};
use crate::ui::theme::Theme;

/// Default placeholder text.
pub const DEFAULT_PLACEHOLDER: &str = "Add new tag";

/// Default minimum query length before suggestions are worth showing.
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 2;

/// Change requested by the tag input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInputAction {
    /// Append this tag to the list.
    Add(Tag),
    /// Remove the tag at this index.
    Delete(usize),
    /// The query text changed (raw, untrimmed).
    QueryChanged(String),
}

/// Result of feeding an event to the tag input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    /// Change for the owner to apply, if any.
    pub action: Option<TagInputAction>,
    /// False when the widget did not use the event and the owner should
    /// handle it, e.g. Tab moving focus away from an empty field.
    pub consumed: bool,
}

impl InputOutcome {
    fn new(action: Option<TagInputAction>, consumed: bool) -> Self {
        Self { action, consumed }
    }

    fn consumed() -> Self {
        Self::new(None, true)
    }

    fn ignored() -> Self {
        Self::new(None, false)
    }
}

/// Configuration for the tag input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInputConfig {
    /// Text shown while the query is empty.
    pub placeholder: String,
    /// Keys that commit the highlighted suggestion.
    pub delimiters: Vec<KeyCode>,
    /// Take focus on creation.
    pub autofocus: bool,
    /// Size the query field to its content.
    pub autoresize: bool,
    /// Query length at which suggestions are shown. Owners doing their own
    /// lookups should check [`TagInput::query_meets_minimum`].
    pub min_query_length: usize,
    /// Animation used while busy.
    pub spinner: SpinnerStyle,
}

impl Default for TagInputConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            delimiters: vec![KeyCode::Enter, KeyCode::Tab],
            autofocus: true,
            autoresize: true,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            spinner: SpinnerStyle::default(),
        }
    }
}

/// Screen areas from the last render, used for mouse hit testing.
#[derive(Debug, Clone, Default)]
struct HitAreas {
    container: Rect,
    chips: Vec<Rect>,
    suggestions: Vec<(Rect, usize)>,
    popup: Rect,
}

/// Tag input component.
#[derive(Debug)]
pub struct TagInput {
    config: TagInputConfig,
    theme: Theme,
    /// Owner's tags, read-only.
    tags: Vec<Tag>,
    /// Owner's full suggestion pool.
    pool: Vec<Suggestion>,
    query: QueryInput,
    /// Pool items matching the current query.
    filtered: Vec<Suggestion>,
    /// Highlighted index into `filtered`.
    selected: Option<usize>,
    /// Query field width, only with autoresize.
    measured_width: Option<u16>,
    focused: bool,
    busy: BusyIndicator,
    hit: HitAreas,
}

impl TagInput {
    /// Create a new tag input with the given configuration.
    pub fn new(config: TagInputConfig) -> Self {
        let focused = config.autofocus;
        let busy = BusyIndicator::new().with_style(config.spinner);
        let mut input = Self {
            config,
            theme: Theme::default(),
            tags: Vec::new(),
            pool: Vec::new(),
            query: QueryInput::new(),
            filtered: Vec::new(),
            selected: None,
            measured_width: None,
            focused,
            busy,
            hit: HitAreas::default(),
        };
        input.update_width();
        input
    }

    /// Use a custom theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &TagInputConfig {
        &self.config
    }

    /// Replace the view of the owner's tags.
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }

    /// The tags as last supplied by the owner.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Replace the suggestion pool and refilter it against the current query.
    pub fn set_suggestions(&mut self, pool: Vec<Suggestion>) {
        self.pool = pool;
        self.refilter();
        trace!(
            pool = self.pool.len(),
            matches = self.filtered.len(),
            "Suggestion pool updated"
        );
    }

    /// Suggestions matching the current query.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.filtered
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        self.query.value()
    }

    /// Index of the highlighted suggestion.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted suggestion.
    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.selected.and_then(|i| self.filtered.get(i))
    }

    /// Whether a suggestion is highlighted.
    pub fn is_expanded(&self) -> bool {
        self.selected.is_some()
    }

    /// Query field width in cells, when autoresize is on.
    pub fn measured_width(&self) -> Option<u16> {
        self.measured_width
    }

    /// Check whether the query is long enough for suggestions.
    pub fn query_meets_minimum(&self) -> bool {
        self.query.value().chars().count() >= self.config.min_query_length
    }

    /// Check whether the suggestion popup would be drawn.
    pub fn shows_suggestions(&self) -> bool {
        self.focused && !self.filtered.is_empty() && self.query_meets_minimum()
    }

    /// Check if the widget has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Take keyboard focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Give up keyboard focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Show or hide the busy spinner.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy.set_active(busy);
    }

    /// Check if the busy spinner is shown.
    pub fn is_busy(&self) -> bool {
        self.busy.is_active()
    }

    /// Advance animations. Call on each tick event.
    pub fn tick(&mut self) {
        self.busy.tick();
    }

    /// Replace the query text, as if it had been typed or pasted.
    pub fn set_query(&mut self, text: impl Into<String>) -> TagInputAction {
        self.query.set_value(text);
        self.query_changed()
    }

    fn query_changed(&mut self) -> TagInputAction {
        self.refilter();
        self.update_width();
        trace!(
            query = self.query.value(),
            matches = self.filtered.len(),
            "Query changed"
        );
        TagInputAction::QueryChanged(self.query.value().to_string())
    }

    /// Recompute the filtered list and keep the selection in range.
    fn refilter(&mut self) {
        self.filtered = filter_suggestions(self.query.value(), &self.pool);
        self.normalize_selection();
    }

    fn normalize_selection(&mut self) {
        if self.selected.is_some_and(|i| i >= self.filtered.len()) {
            self.selected = None;
        }
    }

    fn update_width(&mut self) {
        self.measured_width = self.config.autoresize.then(|| {
            let text = if self.query.is_empty() {
                self.config.placeholder.as_str()
            } else {
                self.query.value()
            };
            // One extra cell for the cursor.
            cell_width(text).saturating_add(1)
        });
    }

    /// Highlight the next suggestion, wrapping to the top.
    pub fn select_next(&mut self) {
        let count = self.filtered.len();
        self.selected = match (count, self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(i)) => Some((i + 1) % count),
        };
    }

    /// Highlight the previous suggestion, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            _ => self.filtered.len().checked_sub(1),
        };
    }

    /// Hide the suggestions until the query or pool changes.
    pub fn dismiss(&mut self) {
        self.selected = None;
        self.filtered.clear();
    }

    /// Commit a suggestion as a new tag.
    ///
    /// Disabled suggestions are ignored and leave all state untouched.
    pub fn commit(&mut self, suggestion: &Suggestion) -> Option<TagInputAction> {
        if suggestion.disabled {
            debug!(tag = %suggestion.name, "Ignoring disabled suggestion");
            return None;
        }

        self.query.clear();
        self.selected = None;
        self.refilter();
        self.update_width();
        self.focus();

        debug!(tag = %suggestion.name, "Tag committed");
        Some(TagInputAction::Add(Tag::from(suggestion.clone())))
    }

    /// Commit the highlighted suggestion, if any.
    pub fn commit_selected(&mut self) -> Option<TagInputAction> {
        let suggestion = self.selected_suggestion()?.clone();
        self.commit(&suggestion)
    }

    /// Request removal of the tag at `index` and clear the query.
    ///
    /// Out-of-range indices are ignored.
    pub fn delete(&mut self, index: usize) -> Option<TagInputAction> {
        if index >= self.tags.len() {
            return None;
        }

        self.query.clear();
        self.refilter();
        self.update_width();
        self.focus();

        debug!(index, tag = %self.tags[index].name, "Tag delete requested");
        Some(TagInputAction::Delete(index))
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> InputOutcome {
        if !self.focused {
            return InputOutcome::ignored();
        }

        // Escape always dismisses, even if configured as a delimiter
        if key.code == KeyCode::Esc {
            self.dismiss();
            return InputOutcome::consumed();
        }

        if self.config.delimiters.contains(&key.code) {
            return self.handle_delimiter(key.code);
        }

        match key.code {
            KeyCode::Up => {
                self.select_previous();
                InputOutcome::consumed()
            }
            KeyCode::Down => {
                self.select_next();
                InputOutcome::consumed()
            }
            // Backspace on an empty query removes the last tag
            KeyCode::Backspace if self.query.is_empty() => {
                let action = self
                    .tags
                    .len()
                    .checked_sub(1)
                    .and_then(|last| self.delete(last));
                InputOutcome::new(action, true)
            }
            _ if QueryInput::is_editing_key(&key) => {
                let action = self
                    .query
                    .handle_input(key)
                    .then(|| self.query_changed());
                InputOutcome::new(action, true)
            }
            _ => InputOutcome::ignored(),
        }
    }

    /// A delimiter never types text, except Tab on an empty query which is
    /// left to the owner for focus traversal.
    fn handle_delimiter(&mut self, code: KeyCode) -> InputOutcome {
        let consumed = code != KeyCode::Tab || !self.query.is_empty();
        let action = self.commit_selected();
        InputOutcome::new(action, consumed)
    }

    /// Handle mouse input using the areas from the last render.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> InputOutcome {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let clicked_suggestion = self
                    .hit
                    .suggestions
                    .iter()
                    .find(|(rect, _)| rect.contains(pos))
                    .map(|&(_, index)| index);
                if let Some(index) = clicked_suggestion {
                    let action = self
                        .filtered
                        .get(index)
                        .cloned()
                        .and_then(|s| self.commit(&s));
                    return InputOutcome::new(action, true);
                }
                if let Some(index) = self.hit.chips.iter().position(|r| r.contains(pos)) {
                    let action = self.delete(index);
                    return InputOutcome::new(action, true);
                }
                if self.hit.container.contains(pos) {
                    self.focus();
                    return InputOutcome::consumed();
                }
                InputOutcome::ignored()
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp
                if self.hit.container.contains(pos) || self.hit.popup.contains(pos) =>
            {
                if mouse.kind == MouseEventKind::ScrollDown {
                    self.select_next();
                } else {
                    self.select_previous();
                }
                InputOutcome::consumed()
            }
            _ => InputOutcome::ignored(),
        }
    }

    fn chip_labels(&self) -> Vec<String> {
        self.tags.iter().map(chip_label).collect()
    }

    /// Query field width including room for the spinner.
    fn field_width(&self) -> Option<u16> {
        let spinner = if self.busy.is_active() { 2 } else { 0 };
        self.measured_width.map(|w| w.saturating_add(spinner))
    }

    /// Height needed to show every chip and the field at the given width,
    /// borders included.
    pub fn desired_height(&self, width: u16) -> u16 {
        let widths: Vec<u16> = self
            .chip_labels()
            .iter()
            .map(|label| cell_width(label))
            .collect();
        let area = Rect {
            x: 0,
            y: 0,
            width: width.saturating_sub(2),
            height: u16::MAX,
        };
        layout_chips(&widths, area, self.field_width())
            .rows
            .saturating_add(2)
    }

    /// Render the tag input, with the suggestion popup below it.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let labels = self.chip_labels();
        let widths: Vec<u16> = labels
            .iter()
            .map(|label| cell_width(label))
            .collect();
        let layout = layout_chips(&widths, inner, self.field_width());

        for ((label, tag), rect) in labels.iter().zip(&self.tags).zip(&layout.chips) {
            if rect.width == 0 {
                continue;
            }
            let chip = Paragraph::new(Span::styled(
                label.clone(),
                self.theme.chip_style(tag.disabled),
            ));
            frame.render_widget(chip, *rect);
        }

        let mut field = layout.input;
        if self.busy.is_active() && field.width >= 2 {
            field.width -= 2;
            let spinner_area = Rect::new(field.x + field.width + 1, field.y, 1, 1);
            let spinner = Paragraph::new(Span::styled(
                self.busy.frame(),
                Style::default().fg(self.theme.spinner),
            ));
            frame.render_widget(spinner, spinner_area);
        }
        self.query.render(
            frame,
            field,
            &self.config.placeholder,
            (Style::default(), self.theme.placeholder_style()),
            self.focused,
        );

        self.hit = HitAreas {
            container: area,
            chips: layout.chips,
            ..HitAreas::default()
        };

        if self.shows_suggestions() {
            if let Some(popup) = popup_area(area, frame.area(), self.filtered.len()) {
                self.hit.popup = popup;
                self.hit.suggestions = render_suggestions(
                    frame,
                    popup,
                    &self.filtered,
                    self.query.value(),
                    self.selected,
                    &self.theme,
                );
            }
        }
    }
}

impl Default for TagInput {
    fn default() -> Self {
        Self::new(TagInputConfig::default())
    }
}
