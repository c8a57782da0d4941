//! Error types for the engine crate.

use thiserror::Error;

/// Caller-misuse errors returned synchronously by `submit`.
///
/// Transport and tool faults never surface here; they resolve through
/// `TurnOutcome` and the event stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A turn is already executing for this conversation.
    #[error("a turn is already in flight for this conversation")]
    TurnInFlight,
    /// The utterance was empty after trimming.
    #[error("utterance is empty")]
    EmptyUtterance,
    /// The utterance exceeded the configured length cap.
    #[error("utterance exceeds {0} characters")]
    UtteranceTooLong(usize),
}
