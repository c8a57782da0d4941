//! The closed entity set, the data store, and bounded lookup reports.

use crate::error::StoreError;
use crate::records::{
    AgentRecord, AgentSummary, AlertRecord, AlertSummary, PosDeviceRecord, PosDeviceSummary,
    SupervisorRecord, SupervisorSummary,
};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Maximum number of record summaries included in a lookup report.
pub const MAX_SUMMARY_RECORDS: usize = 10;

/// The closed set of queryable entity collections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Supervisors,
    Agents,
    PosDevices,
    Alerts,
}

impl Entity {
    /// All queryable entities, in tool-schema order.
    pub const ALL: [Entity; 4] = [
        Entity::Supervisors,
        Entity::Agents,
        Entity::PosDevices,
        Entity::Alerts,
    ];

    /// Return the entity's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Supervisors => "supervisors",
            Entity::Agents => "agents",
            Entity::PosDevices => "pos_devices",
            Entity::Alerts => "alerts",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Entity {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "supervisors" => Ok(Entity::Supervisors),
            "agents" => Ok(Entity::Agents),
            "pos_devices" => Ok(Entity::PosDevices),
            "alerts" => Ok(Entity::Alerts),
            other => Err(StoreError::UnknownEntity(other.to_string())),
        }
    }
}

/// Bounded view of one entity collection, sized for a tool payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupReport {
    /// Total records in the collection (after alert filtering).
    pub count: usize,
    /// Fixed-field summaries for at most [`MAX_SUMMARY_RECORDS`] records.
    pub summary: Vec<Value>,
    /// Present when the summary was truncated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Seed payload accepted by [`DataStore::from_json_str`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub supervisors: Vec<SupervisorRecord>,
    #[serde(default)]
    pub agents: Vec<AgentRecord>,
    #[serde(default)]
    pub pos_devices: Vec<PosDeviceRecord>,
    #[serde(default)]
    pub alerts: Vec<AlertRecord>,
}

/// Read-only store of the four entity collections.
///
/// Loaded once per application session and shared; the engine never mutates
/// it.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    supervisors: Vec<SupervisorRecord>,
    agents: Vec<AgentRecord>,
    pos_devices: Vec<PosDeviceRecord>,
    alerts: Vec<AlertRecord>,
}

impl DataStore {
    /// Create a store from already-loaded collections.
    pub fn new(seed: SeedData) -> Self {
        Self {
            supervisors: seed.supervisors,
            agents: seed.agents,
            pos_devices: seed.pos_devices,
            alerts: seed.alerts,
        }
    }

    /// Parse a JSON seed document into a store.
    pub fn from_json_str(contents: &str) -> Result<Self, StoreError> {
        let seed: SeedData = serde_json::from_str(contents)?;
        debug!(
            "loaded seed data (supervisors={}, agents={}, pos_devices={}, alerts={})",
            seed.supervisors.len(),
            seed.agents.len(),
            seed.pos_devices.len(),
            seed.alerts.len()
        );
        Ok(Self::new(seed))
    }

    /// Store pre-populated with the built-in demo inventory.
    pub fn demo() -> Self {
        Self::new(crate::demo::demo_records())
    }

    /// Number of records held for an entity, before summary truncation.
    ///
    /// Resolved alerts are excluded, matching what `lookup` reports.
    pub fn count(&self, entity: Entity) -> usize {
        match entity {
            Entity::Supervisors => self.supervisors.len(),
            Entity::Agents => self.agents.len(),
            Entity::PosDevices => self.pos_devices.len(),
            Entity::Alerts => self
                .alerts
                .iter()
                .filter(|alert| !alert.status.is_resolved())
                .count(),
        }
    }

    /// Produce the bounded lookup report for one entity collection.
    pub fn lookup(&self, entity: Entity) -> LookupReport {
        let summaries: Vec<Value> = match entity {
            Entity::Supervisors => project(&self.supervisors, |r| SupervisorSummary::from(r)),
            Entity::Agents => project(&self.agents, |r| AgentSummary::from(r)),
            Entity::PosDevices => project(&self.pos_devices, |r| PosDeviceSummary::from(r)),
            Entity::Alerts => {
                let unresolved: Vec<&AlertRecord> = self
                    .alerts
                    .iter()
                    .filter(|alert| !alert.status.is_resolved())
                    .collect();
                unresolved
                    .iter()
                    .map(|alert| summary_value(AlertSummary::from(*alert)))
                    .collect()
            }
        };

        let count = self.count(entity);
        let (summary, note) = if count > MAX_SUMMARY_RECORDS {
            let truncated: Vec<Value> = summaries.into_iter().take(MAX_SUMMARY_RECORDS).collect();
            let note = format!(
                "Showing a summary of the first {MAX_SUMMARY_RECORDS} records out of {count} total."
            );
            (truncated, Some(note))
        } else {
            (summaries, None)
        };

        debug!(
            "lookup (entity={}, count={}, summarized={}, truncated={})",
            entity,
            count,
            summary.len(),
            note.is_some()
        );
        LookupReport {
            count,
            summary,
            note,
        }
    }
}

fn project<R, S: Serialize>(records: &[R], summarize: impl Fn(&R) -> S) -> Vec<Value> {
    records
        .iter()
        .map(|record| summary_value(summarize(record)))
        .collect()
}

/// Serialize a summary struct; summaries contain only plain fields, so this
/// cannot fail for any value constructed in this crate.
fn summary_value<S: Serialize>(summary: S) -> Value {
    serde_json::to_value(summary).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{AlertStatus, Severity};
    use pretty_assertions::assert_eq;

    fn agent(id: i64) -> AgentRecord {
        AgentRecord {
            agent_id: id,
            name: format!("Agent {id}"),
            location: "Kumasi".to_string(),
            supervisor_name: "Bob Smith".to_string(),
        }
    }

    fn store_with_agents(count: i64) -> DataStore {
        DataStore::new(SeedData {
            agents: (1..=count).map(agent).collect(),
            ..SeedData::default()
        })
    }

    #[test]
    fn entity_parses_wire_names() {
        assert_eq!("agents".parse::<Entity>().expect("parse"), Entity::Agents);
        assert_eq!(
            "pos_devices".parse::<Entity>().expect("parse"),
            Entity::PosDevices
        );
        let err = "devices".parse::<Entity>().expect_err("unknown");
        assert_eq!(
            err.to_string(),
            "Entity 'devices' not found or not supported."
        );
    }

    #[test]
    fn lookup_under_cap_has_no_note() {
        let report = store_with_agents(5).lookup(Entity::Agents);
        assert_eq!(report.count, 5);
        assert_eq!(report.summary.len(), 5);
        assert_eq!(report.note, None);
    }

    #[test]
    fn lookup_over_cap_truncates_with_note() {
        let report = store_with_agents(25).lookup(Entity::Agents);
        assert_eq!(report.count, 25);
        assert_eq!(report.summary.len(), 10);
        let note = report.note.expect("note");
        assert!(note.contains("10"));
        assert!(note.contains("25"));
    }

    #[test]
    fn lookup_projects_agent_fields() {
        let report = store_with_agents(1).lookup(Entity::Agents);
        assert_eq!(
            report.summary[0],
            serde_json::json!({
                "id": 1,
                "name": "Agent 1",
                "supervisor": "Bob Smith",
                "location": "Kumasi",
            })
        );
    }

    #[test]
    fn lookup_excludes_resolved_alerts() {
        let alert = |id: i64, status: AlertStatus| AlertRecord {
            id,
            title: format!("Alert {id}"),
            severity: Severity::High,
            status,
        };
        let store = DataStore::new(SeedData {
            alerts: vec![
                alert(1, AlertStatus::Open),
                alert(2, AlertStatus::Resolved),
                alert(3, AlertStatus::Acknowledged),
            ],
            ..SeedData::default()
        });

        let report = store.lookup(Entity::Alerts);
        assert_eq!(report.count, 2);
        assert_eq!(report.summary.len(), 2);
        assert_eq!(report.summary[0]["id"], 1);
        assert_eq!(report.summary[1]["id"], 3);
    }

    #[test]
    fn lookup_report_serializes_without_absent_note() {
        let encoded =
            serde_json::to_value(store_with_agents(2).lookup(Entity::Agents)).expect("serialize");
        assert_eq!(encoded.get("note"), None);
        assert_eq!(encoded["count"], 2);
    }

    #[test]
    fn seed_loader_accepts_partial_documents() {
        let store = DataStore::from_json_str(
            r#"{ "agents": [{ "agent_id": 7, "name": "Agent 7", "location": "Tamale", "supervisor_name": "Carol Lee" }] }"#,
        )
        .expect("seed");
        assert_eq!(store.count(Entity::Agents), 1);
        assert_eq!(store.count(Entity::Supervisors), 0);
    }

    #[test]
    fn seed_loader_rejects_malformed_documents() {
        assert!(DataStore::from_json_str("{ not json").is_err());
    }
}
