//! Intrinsic text measurement.
//!
//! A character-cell estimate: every display cell is `CHAR_WIDTH` wide at the
//! base font size, and metrics scale linearly with the font size. Good enough
//! for stacking decisions; hosts re-measure with real shaping when drawing.

use unicode_width::UnicodeWidthChar;

use crate::primitives::Size;

use super::length::{BASE_FONT_SIZE, CHAR_WIDTH, LINE_HEIGHT};

/// Estimate display width in cell units (1 for Latin, 2 for CJK, 0 for combining marks).
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

/// Measure `text` at `font_size`, wrapping to `max_width`.
///
/// `max_lines == 0` means unlimited. A non-positive or non-finite `max_width`
/// disables wrapping.
pub fn measure_text(text: &str, font_size: f32, max_lines: u32, max_width: f32) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }

    let scale = font_size / BASE_FONT_SIZE;
    let cell = CHAR_WIDTH * scale;
    let line_height = LINE_HEIGHT * scale;
    let wraps = max_width.is_finite() && max_width > 0.0;

    let mut width = 0.0f32;
    let mut lines = 0u32;
    for paragraph in text.split('\n') {
        let natural = unicode_display_width(paragraph) * cell;
        if wraps && natural > max_width {
            width = width.max(max_width);
            lines = lines.saturating_add((natural / max_width).ceil() as u32);
        } else {
            width = width.max(natural);
            lines = lines.saturating_add(1);
        }
    }

    if max_lines > 0 {
        lines = lines.min(max_lines);
    }

    Size::new(width, lines as f32 * line_height)
}
