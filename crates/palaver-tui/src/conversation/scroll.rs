//! Scroll state for the message viewport.
//!
//! Handles manual scrolling and pinning to the newest row whenever the
//! thread revision changes between renders.

/// Rows scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Message viewport scroll state.
#[derive(Debug, Default)]
pub struct ScrollController {
    /// Index of the first visible row.
    offset: usize,
    /// Thread revision seen at the previous render.
    seen_revision: Option<u64>,
    /// Scroll to the bottom at the next measurable render.
    pending_pin: bool,
    /// Largest valid offset as of the last render.
    max_offset: usize,
    /// Viewport height as of the last render.
    viewport_rows: usize,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the scroll offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Largest offset reached by the last render.
    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Viewport height recorded by the last render.
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Whether a pin to the bottom is still waiting for a render.
    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.pending_pin
    }

    /// Record the thread revision about to be drawn.
    ///
    /// A revision different from the last one seen (including the first
    /// render) requests a scroll to the bottom.
    pub fn observe(&mut self, revision: u64) {
        if self.seen_revision != Some(revision) {
            self.seen_revision = Some(revision);
            self.pending_pin = true;
        }
    }

    /// Settle the offset for a render of `content_rows` rows in a viewport
    /// of `viewport_rows` rows and return it.
    ///
    /// A pending pin is only consumed once the viewport has a height.
    pub fn commit(&mut self, content_rows: usize, viewport_rows: usize) -> usize {
        self.viewport_rows = viewport_rows;
        self.max_offset = content_rows.saturating_sub(viewport_rows);

        if self.pending_pin && viewport_rows > 0 {
            self.offset = self.max_offset;
            self.pending_pin = false;
        } else {
            self.offset = self.offset.min(self.max_offset);
        }

        self.offset
    }

    /// Scroll towards older rows.
    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Scroll towards newer rows, stopping at the bottom.
    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = (self.offset + rows).min(self.max_offset);
    }

    /// Scroll up by one viewport.
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_rows.max(1));
    }

    /// Scroll down by one viewport.
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_rows.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_render_pins_to_bottom() {
        let mut scroll = ScrollController::new();
        scroll.observe(0);
        assert_eq!(scroll.commit(30, 10), 20);
        assert!(!scroll.is_pending());
    }

    #[test]
    fn test_empty_content_scrolls_to_zero() {
        let mut scroll = ScrollController::new();
        scroll.observe(0);
        assert_eq!(scroll.commit(0, 10), 0);
        assert_eq!(scroll.max_offset(), 0);
    }

    #[test]
    fn test_new_revision_pins_after_manual_scroll() {
        let mut scroll = ScrollController::new();
        scroll.observe(1);
        scroll.commit(30, 10);
        scroll.scroll_up(7);
        assert_eq!(scroll.commit(30, 10), 13);

        scroll.observe(2);
        assert_eq!(scroll.commit(34, 10), 24);
    }

    #[test]
    fn test_same_revision_keeps_offset() {
        let mut scroll = ScrollController::new();
        scroll.observe(3);
        scroll.commit(30, 10);
        scroll.scroll_up(5);

        scroll.observe(3);
        assert_eq!(scroll.commit(30, 10), 15);
        // Input bar grew: offset only clamps
        scroll.observe(3);
        assert_eq!(scroll.commit(30, 8), 15);
    }

    #[test]
    fn test_same_revision_clamps_when_content_shrinks() {
        let mut scroll = ScrollController::new();
        scroll.observe(1);
        scroll.commit(30, 10);
        scroll.observe(1);
        assert_eq!(scroll.commit(12, 10), 2);
    }

    #[test]
    fn test_zero_viewport_keeps_pin_pending() {
        let mut scroll = ScrollController::new();
        scroll.observe(1);
        assert_eq!(scroll.commit(30, 0), 0);
        assert!(scroll.is_pending());

        // Same revision: the earlier request still applies
        scroll.observe(1);
        assert_eq!(scroll.commit(30, 10), 20);
        assert!(!scroll.is_pending());
    }

    #[test]
    fn test_manual_scroll_bounds() {
        let mut scroll = ScrollController::new();
        scroll.observe(0);
        scroll.commit(25, 10);

        scroll.scroll_down(SCROLL_SPEED);
        assert_eq!(scroll.offset(), 15);

        scroll.page_up();
        assert_eq!(scroll.offset(), 5);
        scroll.page_up();
        assert_eq!(scroll.offset(), 0);

        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset(), 15);
    }
}
