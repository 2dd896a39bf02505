//! The caller-owned conversation thread.
//!
//! A [`Thread`] is an ordered list of messages (oldest first) paired with a
//! revision counter. Every mutation bumps the revision; views compare the
//! revision between renders to detect that the list changed.

use crate::message::Message;
use std::path::Path;

/// Ordered, revisioned list of messages.
#[derive(Debug, Clone, Default)]
pub struct Thread {
    messages: Vec<Message>,
    revision: u64,
}

impl Thread {
    /// Create an empty thread at revision 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a thread holding the given messages.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            revision: 0,
        }
    }

    /// All messages in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.revision += 1;
    }

    /// Replace the whole list.
    pub fn replace(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.revision += 1;
    }

    /// Remove all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.revision += 1;
    }

    /// Load a thread from a JSONL file (one message per line).
    pub fn load_jsonl(path: &Path) -> Result<Self, ThreadError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_jsonl(&content)
    }

    /// Parse JSONL text into a thread. Blank lines are skipped.
    pub fn parse_jsonl(content: &str) -> Result<Self, ThreadError> {
        let mut messages = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let message = serde_json::from_str(line).map_err(|source| ThreadError::Parse {
                line: idx + 1,
                source,
            })?;
            messages.push(message);
        }
        Ok(Self::from_messages(messages))
    }
}

/// Errors loading a thread.
#[derive(Debug, thiserror::Error)]
pub enum ThreadError {
    /// I/O error reading the thread file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line that is not a valid message.
    #[error("Invalid message on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
