//! Headless mode for the palaver TUI.
//!
//! Runs the app against ratatui's `TestBackend` instead of a real terminal,
//! enabling end-to-end testing and automation. Input is sent through a
//! [`HeadlessHandle`] and the screen is captured after each render.

use std::time::Duration;

use palaver_engine::{Config, Thread};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::app::App;
use crate::event::{Action, Event};

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Current draft text.
    pub draft: String,
    /// Whether the composing indicator is showing.
    pub composing: bool,
    /// Number of messages in the thread.
    pub message_count: usize,
    /// Whether the sidebar is open.
    pub sidebar_open: bool,
    /// Whether the TUI should quit.
    pub should_quit: bool,
}

/// Handle to control a headless TUI instance.
pub struct HeadlessHandle {
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.action_tx.send(action).is_ok()
    }

    /// Type `text` one character at a time. Line breaks insert newlines.
    pub fn type_text(&self, text: &str) -> bool {
        text.chars().all(|ch| {
            let action = if ch == '\n' {
                Action::Newline
            } else {
                Action::Insert(ch)
            };
            self.send_action(action)
        })
    }

    /// Paste `text` as a terminal bracketed paste would.
    pub fn paste(&self, text: &str) -> bool {
        self.event_tx.send(Event::Paste(text.to_string())).is_ok()
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(&mut self, condition: F, timeout: Duration) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            match tokio::time::timeout(remaining, self.state_rx.changed()).await {
                Ok(Ok(())) => {}
                _ => return None,
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(&mut self, text: &str, timeout: Duration) -> Option<HeadlessState> {
        self.wait_for(|s| s.screen_contents.contains(text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50, // Faster tick rate for testing
        }
    }
}

/// Run the TUI in headless mode.
///
/// Returns a handle to control the TUI and a join handle for the background task.
///
/// # Example
///
/// ```ignore
/// let (mut handle, task) = spawn_headless(&Config::default(), Thread::new(), HeadlessConfig::default());
///
/// handle.type_text("Hello");
/// handle.send_action(Action::Submit);
/// let state = handle.wait_for_text("Echo: Hello", Duration::from_secs(2)).await;
///
/// handle.send_action(Action::Quit);
/// task.await.unwrap();
/// ```
pub fn spawn_headless(
    config: &Config,
    thread: Thread,
    headless: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let app = App::new(config, thread, event_tx.clone());

    let task = tokio::spawn(async move {
        run_headless_loop(app, headless, action_rx, event_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle {
        action_tx,
        event_tx,
        state_rx,
    };

    (handle, task)
}

async fn run_headless_loop(
    mut app: App,
    config: HeadlessConfig,
    mut action_rx: mpsc::UnboundedReceiver<Action>,
    mut event_rx: mpsc::UnboundedReceiver<Event>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let backend = TestBackend::new(config.width, config.height);
    let mut terminal = Terminal::new(backend)?;

    let tick_duration = Duration::from_millis(config.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            app.render(area, frame.buffer_mut());
        })?;

        let screen_contents = buffer_to_string(terminal.backend().buffer());
        let _ = state_tx.send(HeadlessState {
            screen_contents,
            draft: app.view.draft().to_string(),
            composing: app.view.is_composing(),
            message_count: app.thread.len(),
            sidebar_open: app.sidebar_open,
            should_quit: app.should_quit,
        });

        if app.should_quit {
            break;
        }

        tokio::select! {
            action = action_rx.recv() => match action {
                Some(action) => app.handle_action(action),
                // Handle dropped: nobody is driving the app any more
                None => break,
            },
            Some(event) = event_rx.recv() => app.handle_event(event),
            () = tokio::time::sleep(tick_duration) => app.tick(),
        }
    }

    Ok(())
}

/// Convert a terminal buffer to a string representation.
///
/// Trailing spaces are trimmed from every row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}
