//! Full-width input bar widget.
//!
//! Grows with the draft up to a row limit, then scrolls internally to keep
//! the cursor visible. The send affordance sits in the bottom-right corner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::text::layout_draft;
use crate::theme::{BorderSet, IconSet, Theme};
use crate::widgets::TextInputState;

/// Columns reserved on the right of the input for the send glyph.
pub const SEND_WIDTH: u16 = 3;

/// Full-width input bar for text entry.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    placeholder: &'a str,
    max_rows: u16,
    focused: bool,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(
        input: &'a TextInputState,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            input,
            theme,
            icons,
            borders,
            placeholder: "",
            max_rows: 4,
            focused: false,
        }
    }

    /// Set the placeholder shown while the draft is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the maximum number of visible text rows.
    #[must_use]
    pub fn max_rows(mut self, max_rows: u16) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set whether the input bar is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Total height (borders included) the bar wants for `input` at `width`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn height_for(input: &TextInputState, width: u16, max_rows: u16) -> u16 {
        let rows = layout_draft(input.content(), input.cursor(), text_width(width)).rows.len();
        let visible = rows.clamp(1, usize::from(max_rows.max(1)));
        visible as u16 + 2
    }

    /// Screen cells of the send affordance when the bar occupies `area`.
    pub fn send_area(area: Rect) -> Rect {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        if inner_width < SEND_WIDTH || inner_height == 0 {
            return Rect::default();
        }
        Rect::new(
            area.x + 1 + inner_width - SEND_WIDTH,
            area.y + inner_height,
            SEND_WIDTH,
            1,
        )
    }

    fn draw_cursor(&self, text_area: Rect, row: usize, col: usize, buf: &mut Buffer) {
        if !self.focused || row >= usize::from(text_area.height) || col >= usize::from(text_area.width) {
            return;
        }
        #[allow(clippy::cast_possible_truncation)]
        let position = (text_area.x + col as u16, text_area.y + row as u16);
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}

fn text_width(width: u16) -> usize {
    usize::from(width.saturating_sub(2 + SEND_WIDTH))
}

impl Widget for InputBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.normal())
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text_area = Rect::new(
            inner.x,
            inner.y,
            inner.width.saturating_sub(SEND_WIDTH),
            inner.height,
        );

        if text_area.width > 0 {
            if self.input.is_empty() {
                buf.set_stringn(
                    text_area.x,
                    text_area.y,
                    self.placeholder,
                    usize::from(text_area.width),
                    Style::default().fg(self.theme.muted),
                );
                self.draw_cursor(text_area, 0, 0, buf);
            } else {
                let layout = layout_draft(
                    self.input.content(),
                    self.input.cursor(),
                    usize::from(text_area.width),
                );
                let visible = usize::from(text_area.height);

                // Keep the cursor row in view once the draft outgrows the box
                let scroll = if layout.rows.len() > visible {
                    layout.cursor_row.saturating_sub(visible - 1)
                } else {
                    0
                };

                let text_style = Style::default().fg(self.theme.text);
                for (i, row) in layout.rows.iter().skip(scroll).take(visible).enumerate() {
                    buf.set_stringn(
                        text_area.x,
                        text_area.y + i as u16,
                        row,
                        usize::from(text_area.width),
                        text_style,
                    );
                }

                self.draw_cursor(
                    text_area,
                    layout.cursor_row.saturating_sub(scroll),
                    layout.cursor_col,
                    buf,
                );
            }
        }

        let send = Self::send_area(area);
        if send.width > 0 {
            // Enabled only when there is something worth sending
            let style = if self.input.is_blank() {
                Style::default().fg(self.theme.muted)
            } else {
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD)
            };
            buf.set_string(send.x + 1, send.y, self.icons.send(), style);
        }
    }
}
