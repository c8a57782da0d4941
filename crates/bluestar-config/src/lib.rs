//! Configuration schema and loader for the Blue Star assistant.

mod loader;
mod model;

pub use loader::API_KEY_ENV;
pub use model::{AssistantConfig, ChatConfig, EndpointConfig};

use thiserror::Error;

/// Errors produced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid JSON5.
    #[error("parse error: {0}")]
    Parse(#[from] json5::Error),
    /// Config decoded but failed schema mapping.
    #[error("schema error: {0}")]
    Schema(#[from] serde_json::Error),
    /// Config violates an invariant serde cannot express.
    #[error("invalid config: {0}")]
    Invalid(String),
}
