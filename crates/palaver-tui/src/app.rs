//! Application state: the caller that owns the thread.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use palaver_engine::{respond, Config, Message, Reply, ResponderConfig, Thread};

use crate::conversation::{ConversationPane, ConversationView, Signal, ViewSettings};
use crate::event::{key_to_action, mouse_to_action, Action, Event};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::widgets::Sidebar;

/// Width of the sidebar when open.
const SIDEBAR_WIDTH: u16 = 26;

/// Main application state.
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// The conversation shown in the view.
    pub thread: Thread,

    /// Draft, scroll and composing state of the conversation view.
    pub view: ConversationView,

    /// Whether the sidebar is visible.
    pub sidebar_open: bool,

    theme: Theme,
    icons: IconSet,
    borders: BorderSet,

    responder: ResponderConfig,
    responder_label: String,

    /// Where timer and reply events are posted.
    notifier: UnboundedSender<Event>,

    /// Responder tasks that have not reported back yet.
    pending: Vec<JoinHandle<()>>,
}

impl App {
    /// Create a new app instance around `thread`.
    pub fn new(config: &Config, thread: Thread, notifier: UnboundedSender<Event>) -> Self {
        let mode = if std::env::var_os("NO_COLOR").is_some() {
            IconMode::Ascii
        } else {
            IconMode::from(config.icons)
        };

        Self {
            should_quit: false,
            thread,
            view: ConversationView::new(ViewSettings::from_config(config), notifier.clone()),
            sidebar_open: false,
            theme: Theme::from(config.theme),
            icons: IconSet::new(mode),
            borders: BorderSet::new(mode),
            responder_label: config.responder.label(),
            responder: config.responder.clone(),
            notifier,
            pending: Vec::new(),
        }
    }

    /// Handle an event from the terminal or from a background task.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_action(key_to_action(key)),
            Event::Mouse(mouse) => self.handle_action(mouse_to_action(mouse)),
            Event::Paste(text) => self.view.paste(&text),
            Event::Tick => self.tick(),
            // Layout is recomputed on every draw
            Event::Resize(_, _) => {}
            Event::ComposingElapsed(generation) => {
                self.view.composing_elapsed(generation);
            }
            Event::Reply(result) => self.add_reply(result),
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        match self.view.handle_action(action) {
            Some(Signal::SendMessage(text)) => self.send(text),
            Some(Signal::ToggleSidebar) => {
                self.sidebar_open = !self.sidebar_open;
                debug!(open = self.sidebar_open, "Sidebar toggled");
            }
            None => {}
        }
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        self.view.tick();
    }

    /// Number of responder tasks still running.
    #[cfg(test)]
    pub(crate) fn pending_replies(&self) -> usize {
        self.pending.iter().filter(|task| !task.is_finished()).count()
    }

    /// Append the user's message and ask the responder for a reply.
    fn send(&mut self, text: String) {
        self.thread.push(Message::user(text));
        self.pending.retain(|task| !task.is_finished());

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No tokio runtime, message not sent to responder");
            return;
        };

        let responder = self.responder.clone();
        let messages = self.thread.messages().to_vec();
        let notifier = self.notifier.clone();
        self.pending.push(runtime.spawn(async move {
            let result = respond(&responder, &messages)
                .await
                .map_err(|e| e.to_string());
            let _ = notifier.send(Event::Reply(result));
        }));
    }

    fn add_reply(&mut self, result: Result<Reply, String>) {
        let content = match result {
            Ok(reply) => {
                debug!(duration_ms = reply.duration_ms, "Reply received");
                reply.content
            }
            Err(e) => {
                warn!(error = %e, "Responder failed");
                format!("Error: {e}")
            }
        };
        self.thread.push(Message::assistant(content));
    }

    /// Draw the app into `area`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        // Sidebar only when the conversation keeps a usable width
        let sidebar = self.sidebar_open && area.width >= SIDEBAR_WIDTH * 2;
        let (sidebar_area, pane_area) = if sidebar {
            (
                Some(Rect::new(area.x, area.y, SIDEBAR_WIDTH, area.height)),
                Rect::new(
                    area.x + SIDEBAR_WIDTH,
                    area.y,
                    area.width - SIDEBAR_WIDTH,
                    area.height,
                ),
            )
        } else {
            (None, area)
        };

        ConversationPane::new(&self.thread, &self.theme, &self.icons, &self.borders).render(
            pane_area,
            buf,
            &mut self.view,
        );

        if let Some(sidebar_area) = sidebar_area {
            Sidebar::new(&self.thread, &self.responder_label, &self.theme, &self.borders)
                .render(sidebar_area, buf);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for task in &self.pending {
            task.abort();
        }
    }
}
