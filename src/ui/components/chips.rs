//! Inline layout of tag chips followed by the query field.

use ratatui::layout::Rect;

use crate::tags::Tag;

/// Narrowest query field when it fills the rest of a row.
pub const MIN_INPUT_WIDTH: u16 = 10;

/// Gap between neighbouring chips.
const CHIP_GAP: u16 = 1;

/// Text shown inside a chip.
pub fn chip_label(tag: &Tag) -> String {
    format!(" {} × ", tag.name)
}

/// Where each chip and the query field go.
///
/// Chips that do not fit in the area get an empty rectangle so indices keep
/// lining up with the tag list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChipLayout {
    pub chips: Vec<Rect>,
    pub input: Rect,
    /// Rows used, including any that overflow the area.
    pub rows: u16,
}

/// Flow chips left to right, wrapping to new rows, then place the field.
///
/// With `input_width` set the field takes that width (autoresize); otherwise
/// it fills the rest of its row, wrapping first when less than
/// [`MIN_INPUT_WIDTH`] remains.
pub fn layout_chips(chip_widths: &[u16], area: Rect, input_width: Option<u16>) -> ChipLayout {
    let right = area.x.saturating_add(area.width);
    let bottom = area.y.saturating_add(area.height);
    let mut x = area.x;
    let mut row: u16 = 0;
    let mut chips = Vec::with_capacity(chip_widths.len());

    let place = |x: u16, row: u16, width: u16| -> Rect {
        let y = area.y.saturating_add(row);
        if y >= bottom || width == 0 {
            Rect::default()
        } else {
            Rect::new(x, y, width, 1)
        }
    };

    for &width in chip_widths {
        let width = width.min(area.width);
        if x > area.x && x.saturating_add(width) > right {
            x = area.x;
            row += 1;
        }
        chips.push(place(x, row, width));
        x = x.saturating_add(width).saturating_add(CHIP_GAP);
    }

    let wanted = input_width.unwrap_or(MIN_INPUT_WIDTH).min(area.width);
    if x > area.x && x.saturating_add(wanted) > right {
        x = area.x;
        row += 1;
    }
    let width = match input_width {
        Some(_) => wanted,
        None => right.saturating_sub(x),
    };
    let input = place(x, row, width);

    ChipLayout {
        chips,
        input,
        rows: row + 1,
    }
}
