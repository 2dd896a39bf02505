//! Conversation view state: draft, scroll, composing indicator.
//!
//! The caller owns the thread and hands it to [`ConversationPane`] on every
//! render. The view reports back through [`Signal`]s returned from
//! [`ConversationView::handle_action`].
//!
//! [`ConversationPane`]: super::ConversationPane

use std::time::Duration;

use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use palaver_engine::Config;

use super::composing::ComposingIndicator;
use super::scroll::ScrollController;
use crate::event::{Action, Event};
use crate::widgets::TextInputState;

/// Outbound notification from the view to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A draft was submitted. Carries the text exactly as typed.
    SendMessage(String),
    /// The header menu was activated.
    ToggleSidebar,
}

/// Presentation settings taken from the config.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub composing_delay: Duration,
    pub max_input_rows: u16,
    pub placeholder: String,
    pub title: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ViewSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            composing_delay: Duration::from_millis(config.composing_delay_ms),
            max_input_rows: config.max_input_rows.max(1),
            placeholder: config.placeholder.clone(),
            title: config.title.clone(),
        }
    }
}

/// State owned by the conversation view between renders.
#[derive(Debug)]
pub struct ConversationView {
    pub(super) settings: ViewSettings,
    pub(super) input: TextInputState,
    pub(super) scroll: ScrollController,
    pub(super) composing: ComposingIndicator,
    notifier: UnboundedSender<Event>,
    /// Header toggle cells from the last render.
    pub(super) toggle_area: Rect,
    /// Send affordance cells from the last render.
    pub(super) send_area: Rect,
}

impl ConversationView {
    /// Create a view. Timer events are posted to `notifier`.
    pub fn new(settings: ViewSettings, notifier: UnboundedSender<Event>) -> Self {
        let composing = ComposingIndicator::new(settings.composing_delay);
        Self {
            settings,
            input: TextInputState::new(),
            scroll: ScrollController::new(),
            composing,
            notifier,
            toggle_area: Rect::default(),
            send_area: Rect::default(),
        }
    }

    /// Current draft text.
    pub fn draft(&self) -> &str {
        self.input.content()
    }

    /// Whether the composing indicator is showing.
    pub fn is_composing(&self) -> bool {
        self.composing.is_active()
    }

    /// Message viewport scroll offset, as of the last render.
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    /// Largest scroll offset, as of the last render.
    pub fn max_scroll_offset(&self) -> usize {
        self.scroll.max_offset()
    }

    /// Height of the message viewport at the last render.
    pub fn viewport_rows(&self) -> usize {
        self.scroll.viewport_rows()
    }

    /// Apply an input action.
    pub fn handle_action(&mut self, action: Action) -> Option<Signal> {
        match action {
            Action::Submit => return self.submit(),
            Action::Newline => self.input.insert('\n'),
            Action::Insert(ch) => self.input.insert(ch),
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Home => self.input.move_home(),
            Action::End => self.input.move_end(),
            Action::ScrollUp(rows) => self.scroll.scroll_up(rows),
            Action::ScrollDown(rows) => self.scroll.scroll_down(rows),
            Action::PageUp => self.scroll.page_up(),
            Action::PageDown => self.scroll.page_down(),
            Action::ToggleSidebar => return Some(Signal::ToggleSidebar),
            Action::Click { column, row } => return self.click(Position::new(column, row)),
            Action::Quit | Action::None => {}
        }
        None
    }

    /// Insert pasted text at the cursor.
    pub fn paste(&mut self, text: &str) {
        self.input.insert_str(text);
    }

    /// Submit the draft.
    ///
    /// A draft that is empty once trimmed is left untouched and nothing is
    /// emitted. Otherwise the composing indicator starts, the draft is
    /// cleared, and the untrimmed text is returned.
    pub fn submit(&mut self) -> Option<Signal> {
        if self.input.is_blank() {
            debug!("Ignoring blank submission");
            return None;
        }

        self.composing.activate(&self.notifier);
        let text = self.input.take();
        debug!(chars = text.chars().count(), "Draft submitted");
        Some(Signal::SendMessage(text))
    }

    /// Handle a composing timer expiry. Returns `true` if it cleared the indicator.
    pub fn composing_elapsed(&mut self, generation: u64) -> bool {
        self.composing.elapsed(generation)
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        self.composing.tick();
    }

    fn click(&mut self, position: Position) -> Option<Signal> {
        if self.toggle_area.contains(position) {
            Some(Signal::ToggleSidebar)
        } else if self.send_area.contains(position) {
            self.submit()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn view() -> (ConversationView, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ConversationView::new(ViewSettings::default(), tx), rx)
    }

    fn type_text(view: &mut ConversationView, text: &str) {
        for ch in text.chars() {
            view.handle_action(Action::Insert(ch));
        }
    }

    #[tokio::test]
    async fn test_submit_emits_draft_once_and_clears() {
        let (mut view, _rx) = view();
        type_text(&mut view, "Hello");

        let signal = view.handle_action(Action::Submit);
        assert_eq!(signal, Some(Signal::SendMessage("Hello".into())));
        assert_eq!(view.draft(), "");
        assert!(view.is_composing());

        // Nothing left to send
        assert_eq!(view.handle_action(Action::Submit), None);
    }

    #[tokio::test]
    async fn test_blank_draft_is_suppressed() {
        let (mut view, _rx) = view();
        assert_eq!(view.submit(), None);
        assert!(!view.is_composing());

        type_text(&mut view, "   ");
        assert_eq!(view.handle_action(Action::Submit), None);
        assert_eq!(view.draft(), "   ");
        assert!(!view.is_composing());

        view.handle_action(Action::Newline);
        assert_eq!(view.submit(), None);
        assert_eq!(view.draft(), "   \n");
    }

    #[tokio::test]
    async fn test_submitted_text_is_not_trimmed() {
        let (mut view, _rx) = view();
        type_text(&mut view, "  spaced  ");
        view.handle_action(Action::Newline);

        assert_eq!(
            view.submit(),
            Some(Signal::SendMessage("  spaced  \n".into()))
        );
    }

    #[tokio::test]
    async fn test_newline_never_submits() {
        let (mut view, _rx) = view();
        type_text(&mut view, "line one");
        assert_eq!(view.handle_action(Action::Newline), None);
        type_text(&mut view, "line two");
        assert_eq!(view.draft(), "line one\nline two");
        assert!(!view.is_composing());
    }

    #[test]
    fn test_editing_actions() {
        let (mut view, _rx) = view();
        type_text(&mut view, "abc");
        view.handle_action(Action::Left);
        view.handle_action(Action::Backspace);
        assert_eq!(view.draft(), "ac");
        view.handle_action(Action::Home);
        view.handle_action(Action::Delete);
        assert_eq!(view.draft(), "c");
        view.handle_action(Action::End);
        view.paste("d\r\ne");
        assert_eq!(view.draft(), "cd\ne");
    }

    #[test]
    fn test_toggle_is_a_pure_signal() {
        let (mut view, _rx) = view();
        type_text(&mut view, "keep");
        assert_eq!(
            view.handle_action(Action::ToggleSidebar),
            Some(Signal::ToggleSidebar)
        );
        assert_eq!(view.draft(), "keep");
    }

    #[tokio::test]
    async fn test_clicks_route_to_controls() {
        let (mut view, _rx) = view();
        view.toggle_area = Rect::new(0, 0, 3, 1);
        view.send_area = Rect::new(26, 11, 3, 1);

        assert_eq!(
            view.handle_action(Action::Click { column: 1, row: 0 }),
            Some(Signal::ToggleSidebar)
        );

        // Disabled send still goes through the blank guard
        assert_eq!(view.handle_action(Action::Click { column: 27, row: 11 }), None);

        type_text(&mut view, "hi");
        assert_eq!(
            view.handle_action(Action::Click { column: 27, row: 11 }),
            Some(Signal::SendMessage("hi".into()))
        );
        assert_eq!(view.handle_action(Action::Click { column: 10, row: 5 }), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_composing_clears_after_delay() {
        let (mut view, mut rx) = view();
        type_text(&mut view, "Hello");
        view.submit();
        assert!(view.is_composing());

        let Some(Event::ComposingElapsed(generation)) = rx.recv().await else {
            panic!("expected composing event");
        };
        assert!(view.composing_elapsed(generation));
        assert!(!view.is_composing());
    }

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            composing_delay_ms: 250,
            max_input_rows: 0,
            ..Config::default()
        };
        let settings = ViewSettings::from_config(&config);
        assert_eq!(settings.composing_delay, Duration::from_millis(250));
        assert_eq!(settings.max_input_rows, 1);
        assert_eq!(settings.title, "Conversation");
    }
}
