//! The conversational tool-calling engine for the Blue Star assistant.
//!
//! This crate owns the transcript, the per-turn state machine, tool
//! dispatch, and the request loop against a chat-completion endpoint.

pub mod dispatch;
pub mod engine;
pub mod error;
pub mod transcript;

pub use dispatch::{LOOKUP_TOOL_NAME, dispatch, lookup_tool_spec};
pub use engine::{
    AssistantEngine, CONNECTIVITY_NOTICE, EMPTY_REPLY_NOTICE, EXHAUSTED_NOTICE, TurnOutcome,
    TurnPhase,
};
pub use error::EngineError;
pub use transcript::Transcript;
