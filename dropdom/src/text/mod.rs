use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::TextAlign;

/// Display width of a string in terminal cells. CJK and most symbols count
/// as two cells, combining marks as zero.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Display width of a single character, zero for control characters.
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Cut `text` down to at most `max_width` cells, appending an ellipsis when
/// anything was dropped. Never splits a wide character in half.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Horizontal offset of a line of `text_width` cells inside `available` cells.
pub fn align_offset(text_width: usize, available: usize, align: TextAlign) -> usize {
    let slack = available.saturating_sub(text_width);
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => slack / 2,
        TextAlign::Right => slack,
    }
}
