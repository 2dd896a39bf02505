//! palaver-tui: Terminal conversation view
//!
//! This crate provides the TUI layer for palaver, including:
//! - The conversation view (message list, auto-scroll, composing indicator, input)
//! - The app shell that owns the thread and talks to the responder
//! - Headless mode for testing and automation

mod app;
pub mod conversation;
mod event;
pub mod headless;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use conversation::{ConversationPane, ConversationView, Signal, ViewSettings};
pub use event::{key_to_action, mouse_to_action, Action, Event, EventHandler};
pub use palaver_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use palaver_engine::{Config, Thread};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::info;

/// Tick rate of the event handler, drives the composing spinner.
const TICK_RATE_MS: u64 = 120;

/// RAII guard for terminal state restoration.
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            ShowCursor
        );
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop over `thread`, and restores the terminal on exit.
pub async fn run_tui(config: &Config, thread: Thread) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let mut guard = TerminalGuard {
        keyboard_enhanced: false,
    };

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;

    // Lets Shift+Enter be told apart from Enter where the terminal supports it
    if matches!(supports_keyboard_enhancement(), Ok(true)) {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        guard.keyboard_enhanced = true;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(TICK_RATE_MS);
    info!(messages = thread.len(), responder = %config.responder.label(), "Starting TUI");
    let mut app = App::new(config, thread, events.sender());

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;
    info!(messages = app.thread.len(), "TUI closed");

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            app.render(area, frame.buffer_mut());
        })?;

        if app.should_quit {
            break;
        }

        match events.next().await {
            Some(event) => app.handle_event(event),
            None => break,
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
