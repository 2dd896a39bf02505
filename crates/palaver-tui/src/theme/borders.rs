//! Border sets for Unicode and ASCII fallback.
//!
//! Supports `NO_COLOR` environment variable by using ASCII borders.

use ratatui::symbols::border;

use super::icons::IconMode;

/// Pure ASCII border characters.
const ASCII: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Border set based on icon mode (supports `NO_COLOR`/ASCII fallback).
#[derive(Debug, Clone)]
pub struct BorderSet {
    mode: IconMode,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Borders for boxed widgets - rounded for Unicode, `+--+` for ASCII.
    pub fn normal(&self) -> border::Set {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => border::ROUNDED,
            IconMode::Ascii => ASCII,
        }
    }
}
