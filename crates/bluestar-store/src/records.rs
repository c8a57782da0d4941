//! Entity records and their summary projections.
//!
//! Summaries are the fixed-field views returned to the model; full records
//! never cross the tool boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supervisor responsible for a group of field agents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupervisorRecord {
    pub supervisor_id: i64,
    pub name: String,
    pub region: String,
    pub contact: String,
}

/// A field agent assigned to a supervisor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentRecord {
    pub agent_id: i64,
    pub name: String,
    pub location: String,
    pub supervisor_name: String,
}

/// A point-of-sale terminal issued to an agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PosDeviceRecord {
    pub serial_number: String,
    pub model: String,
    pub status: String,
    pub condition: String,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub date_issued: Option<String>,
}

/// An operational alert raised against the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRecord {
    pub id: i64,
    pub title: String,
    pub severity: Severity,
    pub status: AlertStatus,
}

/// Alert severity levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Alert lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertStatus {
    Open,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    /// Whether the alert has been resolved and should drop out of lookups.
    pub fn is_resolved(&self) -> bool {
        matches!(self, AlertStatus::Resolved)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        write!(f, "{label}")
    }
}

/// Summary projection of a supervisor record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupervisorSummary {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub contact: String,
}

/// Summary projection of an agent record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentSummary {
    pub id: i64,
    pub name: String,
    pub supervisor: String,
    pub location: String,
}

/// Summary projection of a POS device record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PosDeviceSummary {
    pub serial: String,
    pub agent: Option<String>,
    pub status: String,
}

/// Summary projection of an alert record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertSummary {
    pub id: i64,
    pub title: String,
    pub severity: Severity,
    pub status: AlertStatus,
}

impl From<&SupervisorRecord> for SupervisorSummary {
    fn from(record: &SupervisorRecord) -> Self {
        Self {
            id: record.supervisor_id,
            name: record.name.clone(),
            region: record.region.clone(),
            contact: record.contact.clone(),
        }
    }
}

impl From<&AgentRecord> for AgentSummary {
    fn from(record: &AgentRecord) -> Self {
        Self {
            id: record.agent_id,
            name: record.name.clone(),
            supervisor: record.supervisor_name.clone(),
            location: record.location.clone(),
        }
    }
}

impl From<&PosDeviceRecord> for PosDeviceSummary {
    fn from(record: &PosDeviceRecord) -> Self {
        Self {
            serial: record.serial_number.clone(),
            agent: record.agent_name.clone(),
            status: record.status.clone(),
        }
    }
}

impl From<&AlertRecord> for AlertSummary {
    fn from(record: &AlertRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            severity: record.severity,
            status: record.status,
        }
    }
}
