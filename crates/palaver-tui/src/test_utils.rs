//! Test utilities for palaver-tui snapshot and integration testing.
//!
//! Helpers for building test terminals, ASCII-only styling and sample
//! threads, plus buffer-to-text conversion for snapshots.

use palaver_engine::{Config, IconStyle, Message, Thread};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc;

use crate::app::App;
use crate::theme::{BorderSet, IconMode, IconSet, Theme};

pub use crate::headless::buffer_to_string;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 30;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 10;

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Default theme with ASCII icons and borders, so snapshots are plain text.
pub fn ascii_style() -> (Theme, IconSet, BorderSet) {
    (
        Theme::default(),
        IconSet::new(IconMode::Ascii),
        BorderSet::new(IconMode::Ascii),
    )
}

/// Config with ASCII icons.
pub fn ascii_config() -> Config {
    Config {
        icons: IconStyle::Ascii,
        ..Config::default()
    }
}

/// A short two-message exchange.
pub fn sample_thread() -> Thread {
    Thread::from_messages(vec![
        Message::user("Hello"),
        Message::assistant("Hi! How can I help?"),
    ])
}

/// Create a test app over `thread`. The event receiver is returned so timer
/// and reply events stay deliverable.
pub fn create_test_app(thread: Thread) -> (App, mpsc::UnboundedReceiver<crate::event::Event>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(&ascii_config(), thread, tx), rx)
}

/// Draw the app into a test terminal and return the screen text.
pub fn render_app_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|frame| {
            let area = frame.area();
            app.render(area, frame.buffer_mut());
        })
        .expect("Failed to draw");
    buffer_to_string(terminal.backend().buffer())
}
