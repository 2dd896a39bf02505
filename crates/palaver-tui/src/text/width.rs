//! Text width and truncation utilities.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get the visual width of a string in terminal cells.
///
/// Accounts for wide characters (CJK, emoji) that take 2 cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within a maximum visual width.
///
/// Returns the truncated string with "..." appended if truncation occurred.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    let target_width = max_width.saturating_sub(3);
    if target_width == 0 {
        return ".".repeat(max_width.min(3));
    }

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str("...");
    result
}
