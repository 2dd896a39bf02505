//! Header row with the sidebar toggle control.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::text::truncate_to_width;
use crate::theme::{IconSet, Theme};

/// Columns occupied by the menu glyph and its padding.
const TOGGLE_WIDTH: u16 = 3;

/// One-row header: menu glyph followed by the title.
pub struct Header<'a> {
    title: &'a str,
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            title,
            theme,
            icons,
        }
    }

    /// Clickable cells of the toggle when the header occupies `area`.
    pub fn toggle_area(area: Rect) -> Rect {
        Rect::new(area.x, area.y, TOGGLE_WIDTH.min(area.width), 1.min(area.height))
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(row, Style::default().bg(self.theme.surface));

        if area.width >= TOGGLE_WIDTH {
            buf.set_string(
                area.x + 1,
                area.y,
                self.icons.menu(),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            );
        }

        let title_width = usize::from(area.width.saturating_sub(TOGGLE_WIDTH + 1));
        if title_width > 0 {
            buf.set_string(
                area.x + TOGGLE_WIDTH + 1,
                area.y,
                truncate_to_width(self.title, title_width),
                Style::default().fg(self.theme.subtext),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;

    #[test]
    fn test_header_renders_menu_and_title() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        Header::new("Conversation", &theme, &icons).render(area, &mut buf);
        assert_eq!(buffer_to_string(&buf), " =  Conversation");
    }

    #[test]
    fn test_header_truncates_title() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        Header::new("Conversation", &theme, &icons).render(area, &mut buf);
        assert_eq!(buffer_to_string(&buf), " =  Conve...");
    }

    #[test]
    fn test_toggle_area() {
        assert_eq!(Header::toggle_area(Rect::new(2, 5, 40, 1)), Rect::new(2, 5, 3, 1));
        assert_eq!(Header::toggle_area(Rect::new(0, 0, 2, 1)), Rect::new(0, 0, 2, 1));
    }
}
