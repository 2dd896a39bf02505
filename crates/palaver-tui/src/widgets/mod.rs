//! Widgets composed by the conversation pane and the app shell.

mod header;
mod input_bar;
mod sidebar;
mod text_input;

pub use header::Header;
pub use input_bar::{InputBar, SEND_WIDTH};
pub use sidebar::Sidebar;
pub use text_input::TextInputState;
