//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.

use palaver_engine::IconStyle;

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

impl From<IconStyle> for IconMode {
    fn from(style: IconStyle) -> Self {
        match style {
            IconStyle::Nerd => IconMode::Nerd,
            IconStyle::Unicode => IconMode::Unicode,
            IconStyle::Ascii => IconMode::Ascii,
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    // === Avatars ===

    pub fn user(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰀄",
            IconMode::Unicode => "●",
            IconMode::Ascii => "U",
        }
    }

    pub fn assistant(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰚩",
            IconMode::Unicode => "◆",
            IconMode::Ascii => "A",
        }
    }

    // === Controls ===

    pub fn menu(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰍜",
            IconMode::Unicode => "≡",
            IconMode::Ascii => "=",
        }
    }

    pub fn send(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰒊",
            IconMode::Unicode => "➤",
            IconMode::Ascii => ">",
        }
    }

    // === Spinner Frames (for animation) ===

    pub fn spinner_frames(&self) -> &'static [&'static str] {
        match self.mode {
            IconMode::Nerd => &["󰪞", "󰪟", "󰪠", "󰪡", "󰪢", "󰪣"],
            IconMode::Unicode => &["◐", "◓", "◑", "◒"],
            IconMode::Ascii => &["|", "/", "-", "\\"],
        }
    }

    /// Spinner frame for an ever-increasing tick count.
    pub fn spinner(&self, tick: usize) -> &'static str {
        let frames = self.spinner_frames();
        frames[tick % frames.len()]
    }
}
