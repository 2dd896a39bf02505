//! Configuration for palaver.
//!
//! Every field has a default, so a partial (or missing) config file is
//! always usable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::responder::ResponderConfig;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".palaver/config.json";

/// Main configuration for palaver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How long the composing indicator stays up after a submission.
    #[serde(default = "default_composing_delay_ms")]
    pub composing_delay_ms: u64,

    /// Rows the input box may grow to before it scrolls internally.
    #[serde(default = "default_max_input_rows")]
    pub max_input_rows: u16,

    /// Placeholder shown while the draft is empty.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Title shown in the header row.
    #[serde(default = "default_title")]
    pub title: String,

    /// Colour theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Icon set.
    #[serde(default)]
    pub icons: IconStyle,

    /// Backend that answers submitted messages.
    #[serde(default)]
    pub responder: ResponderConfig,
}

fn default_composing_delay_ms() -> u64 {
    1000
}

fn default_max_input_rows() -> u16 {
    4
}

fn default_placeholder() -> String {
    "Send a message...".into()
}

fn default_title() -> String {
    "Conversation".into()
}

/// Colour theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark theme.
    #[default]
    Mocha,
    /// Light theme.
    Latte,
    /// High contrast theme for accessibility.
    HighContrast,
}

/// Icon set selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    /// Nerd Font glyphs.
    #[default]
    Nerd,
    /// Standard Unicode symbols.
    Unicode,
    /// ASCII only.
    Ascii,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults if the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            composing_delay_ms: default_composing_delay_ms(),
            max_input_rows: default_max_input_rows(),
            placeholder: default_placeholder(),
            title: default_title(),
            theme: ThemeName::default(),
            icons: IconStyle::default(),
            responder: ResponderConfig::default(),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
