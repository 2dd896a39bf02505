//! Text layout utilities.
//!
//! - [`wrap_preserving`] - Wrap message content without collapsing whitespace
//! - [`layout_draft`] - Hard-wrap the input draft and locate the cursor
//! - [`visual_width`], [`truncate_to_width`] - Unicode-aware width helpers

mod width;
mod wrap;

pub use width::{truncate_to_width, visual_width};
pub use wrap::{layout_draft, wrap_preserving, DraftLayout};
