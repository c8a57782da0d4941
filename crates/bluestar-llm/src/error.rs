//! Error types for endpoint calls.

use thiserror::Error;

/// Failures raised by a chat-completion call.
///
/// All variants terminate the current turn; recoverable tool faults are
/// handled inside dispatch and never surface here.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// Network-level failure, including request timeout.
    #[error("endpoint request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// Endpoint answered 2xx but the body could not be interpreted.
    #[error("malformed endpoint response: {0}")]
    Malformed(String),
}
