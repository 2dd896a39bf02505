//! Wrapping for message content and the input draft.

use unicode_width::UnicodeWidthChar;

use super::width::visual_width;

/// Tab stops are expanded to this many spaces.
const TAB_WIDTH: usize = 4;

/// Wrap message content to `width` columns.
///
/// Embedded line breaks always start a new row and every source line maps
/// to at least one row, so blank lines survive. Lines that already fit are
/// kept verbatim (leading, inner and trailing whitespace included); only
/// overlong lines go through word wrapping, breaking words that are wider
/// than the row.
pub fn wrap_preserving(text: &str, width: usize) -> Vec<String> {
    let expanded = text.replace('\r', "").replace('\t', &" ".repeat(TAB_WIDTH));

    let mut rows = Vec::new();
    for line in expanded.split('\n') {
        if width == 0 || visual_width(line) <= width {
            rows.push(line.to_string());
            continue;
        }

        let options = textwrap::Options::new(width).break_words(true);
        let wrapped = textwrap::wrap(line, options);
        if wrapped.is_empty() {
            rows.push(String::new());
        } else {
            rows.extend(wrapped.into_iter().map(std::borrow::Cow::into_owned));
        }
    }

    rows
}

/// Visual rows of the input draft plus the cursor location within them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLayout {
    /// Rows after hard wrapping (never empty).
    pub rows: Vec<String>,
    /// Row holding the cursor.
    pub cursor_row: usize,
    /// Column of the cursor within its row, in cells.
    pub cursor_col: usize,
}

/// Hard-wrap `content` at `width` cells and locate the character cursor.
///
/// Unlike [`wrap_preserving`] this breaks at any character so that every
/// cursor position maps to exactly one cell. A cursor sitting after a
/// full row moves to the start of an extra empty row.
pub fn layout_draft(content: &str, cursor: usize, width: usize) -> DraftLayout {
    let width = width.max(1);
    let mut rows: Vec<String> = Vec::new();
    let mut cursor_row = 0;
    let mut cursor_col = 0;
    let mut index = 0;

    for line in content.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for ch in line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width + ch_width > width && row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            if index == cursor {
                cursor_row = rows.len();
                cursor_col = row_width;
            }
            row.push(ch);
            row_width += ch_width;
            index += 1;
        }

        // Cursor at the end of this line (before its newline)
        if index == cursor {
            if row_width >= width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            cursor_row = rows.len();
            cursor_col = row_width;
        }

        rows.push(row);
        // Account for the '\n' separator
        index += 1;
    }

    DraftLayout {
        rows,
        cursor_row,
        cursor_col,
    }
}
