//! Built-in demo inventory used when no seed file is supplied.

use crate::lookup::SeedData;
use crate::records::{
    AgentRecord, AlertRecord, AlertStatus, PosDeviceRecord, Severity, SupervisorRecord,
};

/// A small, self-consistent inventory for demos and smoke tests.
pub fn demo_records() -> SeedData {
    let supervisors = vec![
        SupervisorRecord {
            supervisor_id: 1,
            name: "Alice Johnson".to_string(),
            region: "Greater Accra".to_string(),
            contact: "123-456".to_string(),
        },
        SupervisorRecord {
            supervisor_id: 2,
            name: "Bob Smith".to_string(),
            region: "Ashanti".to_string(),
            contact: "234-567".to_string(),
        },
        SupervisorRecord {
            supervisor_id: 3,
            name: "Carol Lee".to_string(),
            region: "Northern".to_string(),
            contact: "345-678".to_string(),
        },
    ];

    let agents = vec![
        AgentRecord {
            agent_id: 101,
            name: "Agent A1".to_string(),
            location: "Accra Central".to_string(),
            supervisor_name: "Alice Johnson".to_string(),
        },
        AgentRecord {
            agent_id: 102,
            name: "Agent A2".to_string(),
            location: "Osu".to_string(),
            supervisor_name: "Alice Johnson".to_string(),
        },
        AgentRecord {
            agent_id: 201,
            name: "Agent B1".to_string(),
            location: "Kumasi".to_string(),
            supervisor_name: "Bob Smith".to_string(),
        },
    ];

    let pos_devices = vec![
        PosDeviceRecord {
            serial_number: "BS-POS-0001".to_string(),
            model: "PAX A920".to_string(),
            status: "Assigned".to_string(),
            condition: "Good".to_string(),
            agent_name: Some("Agent A1".to_string()),
            date_issued: Some("2025-02-14".to_string()),
        },
        PosDeviceRecord {
            serial_number: "BS-POS-0002".to_string(),
            model: "PAX A920".to_string(),
            status: "Available".to_string(),
            condition: "Good".to_string(),
            agent_name: None,
            date_issued: None,
        },
        PosDeviceRecord {
            serial_number: "BS-POS-0003".to_string(),
            model: "Verifone V240m".to_string(),
            status: "In Repair".to_string(),
            condition: "Faulty".to_string(),
            agent_name: Some("Agent B1".to_string()),
            date_issued: Some("2024-11-02".to_string()),
        },
    ];

    let alerts = vec![
        AlertRecord {
            id: 1,
            title: "Device BS-POS-0003 reported faulty".to_string(),
            severity: Severity::High,
            status: AlertStatus::Open,
        },
        AlertRecord {
            id: 2,
            title: "Agent A2 missed daily check-in".to_string(),
            severity: Severity::Medium,
            status: AlertStatus::Acknowledged,
        },
        AlertRecord {
            id: 3,
            title: "Low battery reported on BS-POS-0001".to_string(),
            severity: Severity::Low,
            status: AlertStatus::Resolved,
        },
    ];

    SeedData {
        supervisors,
        agents,
        pos_devices,
        alerts,
    }
}
