//! Message list layout and rendering.
//!
//! Messages are laid out into full-width rows once per render so the
//! scroll controller can measure them before anything is drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use palaver_engine::Message;

use crate::text::wrap_preserving;
use crate::theme::{IconSet, Theme};

/// Columns taken by the avatar badge and the gap after it.
const GUTTER: usize = 4;

/// One laid-out row of the message list.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub line: Line<'static>,
    /// Fill for the whole row width, if any.
    pub background: Option<Color>,
}

impl Row {
    fn blank() -> Self {
        Self {
            line: Line::default(),
            background: None,
        }
    }
}

fn avatar(glyph: &str, color: Color, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {glyph} "),
            Style::default()
                .fg(theme.base)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]
}

/// Lay out `messages` in order, one blank row between entries.
///
/// When `spinner` is set an extra assistant entry showing that frame is
/// appended for the composing indicator.
pub fn layout_rows(
    messages: &[Message],
    spinner: Option<&str>,
    width: usize,
    theme: &Theme,
    icons: &IconSet,
) -> Vec<Row> {
    let text_width = width.saturating_sub(GUTTER);
    let text_style = Style::default().fg(theme.text);
    let mut rows = Vec::new();

    for message in messages {
        if !rows.is_empty() {
            rows.push(Row::blank());
        }

        // Anything that is not the assistant gets the user treatment
        let assistant = message.role.is_assistant();
        let (glyph, color) = if assistant {
            (icons.assistant(), theme.assistant_avatar)
        } else {
            (icons.user(), theme.user_avatar)
        };
        let background = assistant.then_some(theme.assistant_bg);

        for (i, text) in wrap_preserving(&message.content, text_width)
            .into_iter()
            .enumerate()
        {
            let mut spans = if i == 0 {
                avatar(glyph, color, theme)
            } else {
                vec![Span::raw(" ".repeat(GUTTER))]
            };
            spans.push(Span::styled(text, text_style));
            rows.push(Row {
                line: Line::from(spans),
                background,
            });
        }
    }

    if let Some(frame) = spinner {
        if !rows.is_empty() {
            rows.push(Row::blank());
        }
        let mut spans = avatar(icons.assistant(), theme.assistant_avatar, theme);
        spans.push(Span::styled(frame.to_string(), Style::default().fg(theme.muted)));
        rows.push(Row {
            line: Line::from(spans),
            background: Some(theme.assistant_bg),
        });
    }

    rows
}

/// Draws a window of laid-out rows starting at `offset`.
pub struct MessageList<'a> {
    rows: &'a [Row],
    offset: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(rows: &'a [Row], offset: usize) -> Self {
        Self { rows, offset }
    }
}

impl Widget for MessageList<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let visible = self
            .rows
            .iter()
            .skip(self.offset)
            .take(usize::from(area.height));

        for (i, row) in visible.enumerate() {
            let y = area.y + i as u16;
            if let Some(bg) = row.background {
                buf.set_style(Rect::new(area.x, y, area.width, 1), Style::default().bg(bg));
            }
            buf.set_line(area.x, y, &row.line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;
    use palaver_engine::Role;

    fn ascii() -> IconSet {
        IconSet::new(IconMode::Ascii)
    }

    fn render(rows: &[Row], offset: usize, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        MessageList::new(rows, offset).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_entries_in_order_with_separators() {
        let messages = vec![
            Message::user("hello"),
            Message::assistant("hi there"),
            Message::user("bye"),
        ];
        let rows = layout_rows(&messages, None, 20, &Theme::default(), &ascii());
        assert_eq!(rows.len(), 5);

        let text = buffer_to_string(&render(&rows, 0, 20, 5));
        assert_eq!(text, " U  hello\n\n A  hi there\n\n U  bye");
    }

    #[test]
    fn test_only_assistant_rows_are_emphasized() {
        let theme = Theme::default();
        let messages = vec![Message::user("hello"), Message::assistant("hi")];
        let rows = layout_rows(&messages, None, 20, &theme, &ascii());
        assert_eq!(rows[0].background, None);
        assert_eq!(rows[1].background, None);
        assert_eq!(rows[2].background, Some(theme.assistant_bg));

        let buf = render(&rows, 0, 20, 3);
        assert_eq!(buf[(19, 2)].bg, theme.assistant_bg);
        assert_ne!(buf[(19, 0)].bg, theme.assistant_bg);
        assert_eq!(buf[(1, 0)].bg, theme.user_avatar);
        assert_eq!(buf[(1, 2)].bg, theme.assistant_avatar);
    }

    #[test]
    fn test_line_breaks_and_whitespace_are_preserved() {
        let messages = vec![Message::user("a  b\n\n   c")];
        let rows = layout_rows(&messages, None, 20, &Theme::default(), &ascii());
        let text = buffer_to_string(&render(&rows, 0, 20, 3));
        assert_eq!(text, " U  a  b\n\n       c");
    }

    #[test]
    fn test_long_content_wraps_under_the_gutter() {
        let messages = vec![Message::user("one two three four")];
        let rows = layout_rows(&messages, None, 14, &Theme::default(), &ascii());
        let text = buffer_to_string(&render(&rows, 0, 14, 2));
        assert_eq!(text, " U  one two\n    three four");
    }

    #[test]
    fn test_empty_and_unknown_role_entries() {
        let theme = Theme::default();
        let messages = vec![
            Message::new(Role::from("system"), "note"),
            Message::assistant("   "),
        ];
        let rows = layout_rows(&messages, None, 20, &theme, &ascii());
        assert_eq!(rows.len(), 3);

        let buf = render(&rows, 0, 20, 3);
        assert_eq!(buffer_to_string(&buf), " U  note\n\n A");
        assert_eq!(buf[(1, 0)].bg, theme.user_avatar);
    }

    #[test]
    fn test_spinner_row_follows_messages() {
        let theme = Theme::default();
        let messages = vec![Message::user("hello")];
        let rows = layout_rows(&messages, Some("/"), 20, &theme, &ascii());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].background, Some(theme.assistant_bg));

        let text = buffer_to_string(&render(&rows, 0, 20, 3));
        assert_eq!(text, " U  hello\n\n A  /");

        let alone = layout_rows(&[], Some("|"), 20, &theme, &ascii());
        assert_eq!(alone.len(), 1);
    }

    #[test]
    fn test_offset_skips_rows() {
        let messages = vec![Message::user("1"), Message::user("2"), Message::user("3")];
        let rows = layout_rows(&messages, None, 20, &Theme::default(), &ascii());
        let text = buffer_to_string(&render(&rows, 2, 20, 3));
        assert_eq!(text, " U  2\n\n U  3");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let messages = vec![Message::user("hello"), Message::assistant("hi")];
        let rows = layout_rows(&messages, None, 20, &Theme::default(), &ascii());
        assert_eq!(render(&rows, 0, 20, 4), render(&rows, 0, 20, 4));
    }

    #[test]
    fn test_tiny_areas_do_not_panic() {
        let messages = vec![Message::assistant("some longer reply")];
        let rows = layout_rows(&messages, None, 0, &Theme::default(), &ascii());
        render(&rows, 0, 0, 0);
        render(&rows, 0, 2, 1);
    }
}
