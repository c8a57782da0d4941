//! The endpoint seam the engine calls through.

use crate::error::EndpointError;
use crate::wire::{ChoiceMessage, ToolSpec, WireMessage};
use async_trait::async_trait;
use bluestar_protocol::ToolInvocation;

/// Interface for chat-completion providers.
///
/// Implementations issue one request per call and must be cancel-safe: a
/// dropped future leaves no shared state behind.
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    /// Send the transcript and tool specs, returning the model's reply.
    async fn complete(
        &self,
        messages: &[WireMessage],
        tools: &[ToolSpec],
    ) -> Result<EndpointReply, EndpointError>;
}

/// Parsed reply from the first response choice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointReply {
    /// Assistant text, absent when the model is requesting tool execution.
    pub text: Option<String>,
    /// Tool invocations requested by the model, in reply order.
    pub tool_calls: Vec<ToolInvocation>,
}

impl EndpointReply {
    /// Whether the reply carries neither text nor tool calls.
    pub fn is_empty(&self) -> bool {
        self.tool_calls.is_empty() && self.text.as_deref().is_none_or(str::is_empty)
    }
}

impl From<ChoiceMessage> for EndpointReply {
    fn from(message: ChoiceMessage) -> Self {
        let tool_calls = message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| ToolInvocation {
                id: call.id,
                name: call.function.name,
                arguments: call.function.arguments,
            })
            .collect();
        Self {
            text: message.content,
            tool_calls,
        }
    }
}
