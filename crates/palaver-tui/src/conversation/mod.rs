//! Conversation view module.
//!
//! The conversation view renders a caller-owned thread and captures the
//! draft the user is typing:
//! - Message list with role avatars and assistant emphasis
//! - Auto-scroll whenever the thread revision changes
//! - Composing indicator cleared by a timer after each submission
//! - Input bar that grows with the draft and a header sidebar toggle

mod composing;
mod message_list;
mod scroll;
mod view;
mod widget;

pub use composing::ComposingIndicator;
pub use message_list::{layout_rows, MessageList, Row};
pub use scroll::{ScrollController, SCROLL_SPEED};
pub use view::{ConversationView, Signal, ViewSettings};
pub use widget::ConversationPane;
