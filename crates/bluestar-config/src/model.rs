//! Configuration schema for the Blue Star assistant.

use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Root config for the assistant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AssistantConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl AssistantConfig {
    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chat.max_tool_rounds == 0 {
            return Err(ConfigError::Invalid(
                "chat.max_tool_rounds must be at least 1".to_string(),
            ));
        }
        if self.endpoint.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "endpoint.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Chat-completion endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointConfig {
    /// Full URL of the OpenAI-compatible chat-completions endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model name sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// API key; the `BLUESTAR_API_KEY` environment variable takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Conversation behavior settings consumed by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// System directive placed first in every transcript.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Greeting seeded into new transcripts; empty string disables it.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Maximum tool-call rounds per turn before the turn is failed.
    #[serde(default = "default_max_tool_rounds")]
    pub max_tool_rounds: usize,
    /// Maximum user utterance length in characters.
    #[serde(default = "default_max_utterance_chars")]
    pub max_utterance_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            greeting: default_greeting(),
            max_tool_rounds: default_max_tool_rounds(),
            max_utterance_chars: default_max_utterance_chars(),
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_system_prompt() -> String {
    "You are a friendly and intelligent IT asset management assistant for the \
Blue Star POS tracking system. Your primary function is to help the \
administrator analyze and manage inventory data. You can answer questions \
about supervisors, agents, POS devices, and alerts. You have access to a data \
lookup tool for real-time information. When asked a question about the \
current inventory or staff, use the 'lookupData' tool. Be concise and focus \
on the data requested."
        .to_string()
}

fn default_greeting() -> String {
    "Hello! I'm your Blue Star POS management assistant. How can I help you \
analyze the data today?"
        .to_string()
}

fn default_max_tool_rounds() -> usize {
    8
}

fn default_max_utterance_chars() -> usize {
    2000
}
