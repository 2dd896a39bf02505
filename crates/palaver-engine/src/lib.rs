//! palaver-engine: Headless model for the palaver conversation view
//!
//! This crate provides everything that does not touch the terminal:
//! - Message and role types
//! - The revisioned, caller-owned thread
//! - Configuration
//! - Responders that answer submitted messages

pub mod config;
pub mod message;
pub mod responder;
pub mod thread;

// Re-export commonly used types
pub use config::{Config, ConfigError, IconStyle, ThemeName, DEFAULT_CONFIG_PATH};
pub use message::{Message, Role};
pub use responder::{build_prompt, respond, Reply, ResponderConfig, ResponderError};
pub use thread::{Thread, ThreadError};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
