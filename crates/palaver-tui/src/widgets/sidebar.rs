//! Sidebar drawn by the app when the toggle signal opens it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use palaver_engine::Thread;

use crate::theme::{BorderSet, Theme};

/// Key hints listed under the thread stats.
const KEY_HINTS: [(&str, &str); 5] = [
    ("Enter", "send"),
    ("S-Enter", "newline"),
    ("^B", "sidebar"),
    ("PgUp/Dn", "scroll"),
    ("^C", "quit"),
];

/// Thread statistics and key hints.
pub struct Sidebar<'a> {
    thread: &'a Thread,
    responder: &'a str,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(thread: &'a Thread, responder: &'a str, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            thread,
            responder,
            theme,
            borders,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Thread ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_set(self.borders.normal())
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.base));

        let label = Style::default().fg(self.theme.muted);
        let value = Style::default().fg(self.theme.text);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Messages  ", label),
                Span::styled(self.thread.len().to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Responder ", label),
                Span::styled(self.responder.to_string(), value),
            ]),
            Line::from(""),
        ];
        lines.extend(KEY_HINTS.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:<9}"), Style::default().fg(self.theme.primary)),
                Span::styled(*action, label),
            ])
        }));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;
    use palaver_engine::Message;

    #[test]
    fn test_sidebar_shows_thread_stats() {
        let thread = Thread::from_messages(vec![Message::user("a"), Message::assistant("b")]);
        let theme = Theme::default();
        let borders = BorderSet::new(IconMode::Ascii);

        let area = Rect::new(0, 0, 24, 12);
        let mut buf = Buffer::empty(area);
        Sidebar::new(&thread, "echo", &theme, &borders).render(area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.contains("Thread"));
        assert!(text.contains("Messages  2"));
        assert!(text.contains("Responder echo"));
        assert!(text.contains("^B       sidebar"));
    }
}
