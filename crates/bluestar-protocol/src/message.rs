//! Transcript message variants and tool invocation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in a conversation transcript.
///
/// Local bookkeeping (timestamps) never leaves the process; outbound requests
/// reduce entries to plain role/content wire messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "role")]
pub enum Message {
    /// Fixed instruction; exactly one, always first in a transcript.
    System { text: String },
    /// User-authored utterance.
    User {
        text: String,
        created_at: DateTime<Utc>,
    },
    /// Assistant reply carrying text, tool invocations, or both.
    Assistant {
        text: Option<String>,
        invocations: Vec<ToolInvocation>,
        created_at: DateTime<Utc>,
    },
    /// Output produced for a single tool invocation.
    Tool {
        invocation_id: String,
        payload: String,
        created_at: DateTime<Utc>,
    },
}

impl Message {
    /// Build a system directive message.
    pub fn system(text: impl Into<String>) -> Self {
        Message::System { text: text.into() }
    }

    /// Build a user utterance stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Message::User {
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Build a plain-text assistant reply with no invocations.
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Message::Assistant {
            text: Some(text.into()),
            invocations: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Build an assistant reply with the invocations it requested.
    pub fn assistant_reply(text: Option<String>, invocations: Vec<ToolInvocation>) -> Self {
        Message::Assistant {
            text,
            invocations,
            created_at: Utc::now(),
        }
    }

    /// Build a tool result for the given invocation id.
    pub fn tool_result(invocation_id: impl Into<String>, payload: impl Into<String>) -> Self {
        Message::Tool {
            invocation_id: invocation_id.into(),
            payload: payload.into(),
            created_at: Utc::now(),
        }
    }

    /// Return the wire role string for this message.
    pub fn role_str(&self) -> &'static str {
        match self {
            Message::System { .. } => "system",
            Message::User { .. } => "user",
            Message::Assistant { .. } => "assistant",
            Message::Tool { .. } => "tool",
        }
    }
}

/// A structured request from the model to invoke a named local capability.
///
/// `arguments` is opaque text; the dispatcher parses it and treats failure as
/// a recoverable error returned to the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolInvocation {
    /// Invocation id assigned by the model.
    pub id: String,
    /// Name of the requested tool.
    pub name: String,
    /// Raw argument text to be parsed by the dispatcher.
    pub arguments: String,
}
