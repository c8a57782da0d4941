//! In-memory data store for the Blue Star inventory.
//!
//! Holds the four queryable entity collections and produces the bounded
//! lookup reports the assistant's data tool returns to the model.

mod demo;
mod error;
mod lookup;
mod records;

pub use demo::demo_records;
pub use error::StoreError;
pub use lookup::{DataStore, Entity, LookupReport, MAX_SUMMARY_RECORDS, SeedData};
pub use records::{
    AgentRecord, AgentSummary, AlertRecord, AlertStatus, AlertSummary, PosDeviceRecord,
    PosDeviceSummary, Severity, SupervisorRecord, SupervisorSummary,
};
