//! Chat-completion endpoint client for the Blue Star assistant.
//!
//! Defines the `ChatEndpoint` seam the engine depends on, the
//! OpenAI-compatible wire types, and an HTTP client implementation.

mod endpoint;
mod error;
mod http;
mod wire;

pub use endpoint::{ChatEndpoint, EndpointReply};
pub use error::EndpointError;
pub use http::HttpChatEndpoint;
pub use wire::{
    ChatChoice, ChatCompletionResponse, ChatRequest, ChoiceMessage, ToolSpec, WireFunctionCall,
    WireMessage, WireRole, WireToolCall,
};
