//! Error types for the data store crate.

use thiserror::Error;

/// Errors returned by store lookups and loaders.
///
/// `UnknownEntity`'s display string doubles as the error payload handed back
/// to the model, so its wording is part of the tool contract.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity name is outside the closed queryable set.
    #[error("Entity '{0}' not found or not supported.")]
    UnknownEntity(String),
    /// Seed data could not be parsed.
    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
}
