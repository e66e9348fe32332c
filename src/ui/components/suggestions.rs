//! Suggestion list rendering.
//!
//! Draws the filtered suggestions as a popup list, marking the part of each
//! name that matches the query.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::tags::Suggestion;
use crate::ui::theme::Theme;

/// Maximum number of rows the popup grows to.
pub const MAX_VISIBLE_SUGGESTIONS: u16 = 8;

/// Highlight the query prefix of a suggestion name.
///
/// Suggestions only ever match at the start, so this marks the leading
/// characters of `text` that correspond to the trimmed query, keeping the
/// original casing.
pub fn highlight_prefix(text: &str, query: &str, base: Style, matched: Style) -> Line<'static> {
    let query = query.trim();
    if query.is_empty() {
        return Line::from(Span::styled(text.to_string(), base));
    }

    let query_len = query.chars().count();
    let split = text
        .char_indices()
        .nth(query_len)
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    if !text[..split].to_lowercase().eq(&query.to_lowercase()) {
        return Line::from(Span::styled(text.to_string(), base));
    }

    let mut spans = vec![Span::styled(text[..split].to_string(), base.patch(matched))];
    if split < text.len() {
        spans.push(Span::styled(text[split..].to_string(), base));
    }
    Line::from(spans)
}

/// Compute the popup rectangle below `anchor`, clamped to `screen`.
///
/// Returns `None` when there is no room below the anchor.
pub fn popup_area(anchor: Rect, screen: Rect, item_count: usize) -> Option<Rect> {
    let rows = u16::try_from(item_count)
        .unwrap_or(u16::MAX)
        .min(MAX_VISIBLE_SUGGESTIONS);
    let top = anchor.y.saturating_add(anchor.height);
    let bottom = screen.y.saturating_add(screen.height);
    if rows == 0 || top >= bottom {
        return None;
    }

    let height = (rows + 2).min(bottom - top);
    let width = anchor.width.min(screen.width);
    Some(Rect::new(anchor.x, top, width, height))
}

/// Render the suggestion popup and return the screen rectangle of each
/// visible row, paired with its index in `items`.
pub fn render_suggestions(
    frame: &mut Frame,
    area: Rect,
    items: &[Suggestion],
    query: &str,
    selected: Option<usize>,
    theme: &Theme,
) -> Vec<(Rect, usize)> {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    if visible == 0 {
        return Vec::new();
    }

    // Keep the selected row on screen.
    let offset = match selected {
        Some(index) if index >= visible => index + 1 - visible,
        _ => 0,
    };

    let list_items: Vec<ListItem> = items
        .iter()
        .skip(offset)
        .take(visible)
        .map(|item| {
            let base = if item.disabled {
                theme.disabled_style()
            } else {
                Style::default()
            };
            ListItem::new(highlight_prefix(&item.name, query, base, theme.matched_style()))
        })
        .collect();
    let row_count = list_items.len();

    let list = List::new(list_items)
        .highlight_style(theme.selected_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected.map(|index| index - offset));
    frame.render_stateful_widget(list, inner, &mut state);

    (0..row_count)
        .map(|row| {
            (
                Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
                offset + row,
            )
        })
        .collect()
}
