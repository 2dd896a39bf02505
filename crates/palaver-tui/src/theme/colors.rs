//! Catppuccin color palettes for the TUI.

use palaver_engine::ThemeName;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Roles
    pub user_avatar: Color,
    pub assistant_avatar: Color,
    pub assistant_bg: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(148, 226, 213), // #94e2d5 (teal)

            user_avatar: Color::Rgb(203, 166, 247),      // #cba6f7 (mauve)
            assistant_avatar: Color::Rgb(166, 227, 161), // #a6e3a1 (green)
            assistant_bg: Color::Rgb(49, 50, 68),        // #313244

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(148, 226, 213), // #94e2d5 (teal)
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(23, 146, 153), // #179299 (teal)

            user_avatar: Color::Rgb(136, 57, 239),     // #8839ef (mauve)
            assistant_avatar: Color::Rgb(64, 160, 43), // #40a02b (green)
            assistant_bg: Color::Rgb(220, 224, 232),   // #dce0e8

            border: Color::Rgb(188, 192, 204),        // #bcc0cc
            border_focused: Color::Rgb(23, 146, 153), // #179299 (teal)
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(40, 40, 40),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,

            user_avatar: Color::Magenta,
            assistant_avatar: Color::Green,
            assistant_bg: Color::Rgb(40, 40, 40),

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mocha_theme_creates() {
        let theme = Theme::mocha();
        assert!(matches!(theme.base, Color::Rgb(30, 30, 46)));
    }

    #[test]
    fn test_latte_theme_creates() {
        let theme = Theme::latte();
        assert!(matches!(theme.base, Color::Rgb(239, 241, 245)));
    }

    #[test]
    fn test_high_contrast_theme_creates() {
        let theme = Theme::high_contrast();
        assert!(matches!(theme.base, Color::Black));
    }

    #[test]
    fn test_theme_from_name() {
        assert!(matches!(Theme::from(ThemeName::Latte).base, Color::Rgb(239, 241, 245)));
        assert!(matches!(Theme::from(ThemeName::HighContrast).base, Color::Black));
    }

    #[test]
    fn test_roles_are_distinguishable() {
        for theme in [Theme::mocha(), Theme::latte(), Theme::high_contrast()] {
            assert_ne!(theme.user_avatar, theme.assistant_avatar);
            assert_ne!(theme.base, theme.assistant_bg);
        }
    }
}
