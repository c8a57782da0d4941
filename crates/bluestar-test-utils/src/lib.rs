//! Mock endpoints, event sinks, and store fixtures for engine tests.

mod endpoints;
mod fixtures;
mod sink;

pub use endpoints::{FailingEndpoint, GatedEndpoint, RepeatingToolCallEndpoint, ScriptedEndpoint};
pub use fixtures::{sample_agents, store_with_agents};
pub use sink::CollectingSink;
