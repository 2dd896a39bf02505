//! Conversation pane widget.
//!
//! Combines the header, the message list and the input bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{StatefulWidget, Widget},
};

use palaver_engine::Thread;

use super::message_list::{layout_rows, MessageList};
use super::view::ConversationView;
use crate::theme::{BorderSet, IconSet, Theme};
use crate::widgets::{Header, InputBar};

/// Height of the header row.
const HEADER_HEIGHT: u16 = 1;

/// Conversation pane rendering a caller-owned thread.
///
/// ```text
///  ≡  Conversation
///  ●  I want to build a CLI that
///     converts CSV to JSON
///
///  ◆  Here's a first sketch...
///
/// ╭──────────────────────────────────╮
/// │Send a message...               ➤ │
/// ╰──────────────────────────────────╯
/// ```
pub struct ConversationPane<'a> {
    thread: &'a Thread,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
}

impl<'a> ConversationPane<'a> {
    /// Create a new conversation pane.
    pub fn new(
        thread: &'a Thread,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            thread,
            theme,
            icons,
            borders,
        }
    }
}

impl StatefulWidget for ConversationPane<'_> {
    type State = ConversationView;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        buf.set_style(area, Style::default().bg(self.theme.base));
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header_area = Rect::new(area.x, area.y, area.width, HEADER_HEIGHT);
        let input_height = InputBar::height_for(&state.input, area.width, state.settings.max_input_rows)
            .min(area.height.saturating_sub(HEADER_HEIGHT));
        let input_area = Rect::new(
            area.x,
            area.bottom() - input_height,
            area.width,
            input_height,
        );
        let list_area = Rect::new(
            area.x,
            area.y + HEADER_HEIGHT,
            area.width,
            area.height.saturating_sub(HEADER_HEIGHT + input_height),
        );

        // Lay out first so a new thread revision can pin to the true bottom
        let spinner = state
            .composing
            .is_active()
            .then(|| self.icons.spinner(state.composing.frame()));
        let rows = layout_rows(
            self.thread.messages(),
            spinner,
            usize::from(list_area.width),
            self.theme,
            self.icons,
        );
        state.scroll.observe(self.thread.revision());
        let offset = state
            .scroll
            .commit(rows.len(), usize::from(list_area.height));
        MessageList::new(&rows, offset).render(list_area, buf);

        Header::new(&state.settings.title, self.theme, self.icons).render(header_area, buf);
        state.toggle_area = Header::toggle_area(header_area);

        InputBar::new(&state.input, self.theme, self.icons, self.borders)
            .placeholder(&state.settings.placeholder)
            .max_rows(state.settings.max_input_rows)
            .focused(true)
            .render(input_area, buf);
        state.send_area = InputBar::send_area(input_area);
    }
}
