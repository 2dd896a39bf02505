//! Responders: the backends that answer submitted messages.
//!
//! The conversation view never talks to a responder. The caller appends the
//! submitted text to its thread, hands the thread to [`respond`], and
//! appends whatever comes back.

use crate::message::{Message, Role};
use serde::{Deserialize, Serialize};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Which backend answers messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponderConfig {
    /// Echo the last user message back after a delay.
    Echo {
        #[serde(default = "default_echo_delay_ms")]
        delay_ms: u64,
    },
    /// Run an external command, prompt on stdin, reply on stdout.
    Command {
        command_argv: Vec<String>,
        #[serde(default = "default_timeout")]
        timeout_seconds: u64,
    },
}

fn default_echo_delay_ms() -> u64 {
    600
}

fn default_timeout() -> u64 {
    300
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self::Echo {
            delay_ms: default_echo_delay_ms(),
        }
    }
}

impl ResponderConfig {
    /// Short name for display.
    pub fn label(&self) -> String {
        match self {
            Self::Echo { .. } => "echo".into(),
            Self::Command { command_argv, .. } => command_argv
                .first()
                .cloned()
                .unwrap_or_else(|| "command".into()),
        }
    }
}

/// A responder's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Reply text.
    pub content: String,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

/// Build the transcript prompt handed to command responders.
pub fn build_prompt(messages: &[Message]) -> String {
    use std::fmt::Write;

    let mut prompt = String::from("Conversation:\n");
    for msg in messages {
        let label = match &msg.role {
            Role::User => "User",
            Role::Assistant => "Assistant",
            Role::Other(name) => name.as_str(),
        };
        let _ = write!(prompt, "{label}: {}\n\n", msg.content);
    }
    prompt.push_str("Respond to the user's last message.\n");
    prompt
}

/// Ask the configured responder for a reply to `messages`.
pub async fn respond(config: &ResponderConfig, messages: &[Message]) -> Result<Reply, ResponderError> {
    let start = Instant::now();

    let content = match config {
        ResponderConfig::Echo { delay_ms } => {
            tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
            let last = messages
                .iter()
                .rev()
                .find(|m| m.role == Role::User)
                .map_or("", |m| m.content.as_str());
            format!("Echo: {last}")
        }
        ResponderConfig::Command {
            command_argv,
            timeout_seconds,
        } => run_command(command_argv, *timeout_seconds, &build_prompt(messages)).await?,
    };

    #[allow(clippy::cast_possible_truncation)]
    let duration_ms = start.elapsed().as_millis() as u64;
    debug!(responder = %config.label(), duration_ms, "reply ready");

    Ok(Reply {
        content,
        duration_ms,
    })
}

async fn run_command(argv: &[String], timeout_secs: u64, prompt: &str) -> Result<String, ResponderError> {
    let (program, args) = argv.split_first().ok_or(ResponderError::EmptyCommand)?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(ResponderError::Spawn)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(prompt.as_bytes()).await?;
        drop(stdin);
    }

    match timeout(Duration::from_secs(timeout_secs), child.wait_with_output()).await {
        Ok(Ok(output)) => {
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();

            // Some CLIs print their answer to stderr
            if stdout.trim().is_empty() {
                Ok(stderr)
            } else {
                Ok(stdout)
            }
        }
        Ok(Err(e)) => Err(ResponderError::Io(e)),
        Err(_) => Err(ResponderError::Timeout(program.clone())),
    }
}

/// Errors that can occur while asking a responder.
#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    /// `command_argv` was empty.
    #[error("Responder command is empty")]
    EmptyCommand,

    /// Failed to spawn process.
    #[error("Failed to spawn process: {0}")]
    Spawn(#[source] std::io::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Process timed out.
    #[error("Process timed out: {0}")]
    Timeout(String),
}
