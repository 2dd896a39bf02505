//! Message types for a conversation thread.

use serde::{Deserialize, Serialize};

/// Originator of a message.
///
/// Only [`Role::Assistant`] gets distinct visual treatment. Values other
/// than `user` and `assistant` are kept verbatim in [`Role::Other`] so that
/// unexpected data never fails to load or render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Message typed by the person at the keyboard.
    User,
    /// Reply produced by the responder.
    Assistant,
    /// Any other role string.
    Other(String),
}

impl Role {
    /// Whether this message gets the assistant treatment.
    pub fn is_assistant(&self) -> bool {
        matches!(self, Role::Assistant)
    }

    /// The wire name of the role.
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(name) => name,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::User => "user".into(),
            Role::Assistant => "assistant".into(),
            Role::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message author.
    pub role: Role,
    /// Message content, whitespace and line breaks included.
    #[serde(default)]
    pub content: String,
}

impl Message {
    /// Create a message with an arbitrary role.
    pub fn new(role: impl Into<Role>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_known_values() {
        let msg: Message = serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"role":"assistant","content":"hi"}"#
        );
    }

    #[test]
    fn test_unknown_role_is_preserved() {
        let msg: Message = serde_json::from_str(r#"{"role":"system","content":"be brief"}"#).unwrap();
        assert_eq!(msg.role, Role::Other("system".into()));
        assert!(!msg.role.is_assistant());
        assert_eq!(msg.role.to_string(), "system");
    }

    #[test]
    fn test_missing_content_defaults_to_empty() {
        let msg: Message = serde_json::from_str(r#"{"role":"user"}"#).unwrap();
        assert_eq!(msg.content, "");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Message::user("a").role, Role::User);
        assert!(Message::assistant("b").role.is_assistant());
        assert_eq!(Message::new("tool", "c").role, Role::Other("tool".into()));
    }
}
