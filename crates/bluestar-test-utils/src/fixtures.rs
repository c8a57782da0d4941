//! Store fixtures sized for lookup tests.

use bluestar_store::{AgentRecord, DataStore, SeedData};

/// Build `count` agent records with predictable ids and names.
pub fn sample_agents(count: usize) -> Vec<AgentRecord> {
    (1..=count as i64)
        .map(|id| AgentRecord {
            agent_id: 100 + id,
            name: format!("Agent {id}"),
            location: "Accra".to_string(),
            supervisor_name: "Alice Johnson".to_string(),
        })
        .collect()
}

/// Store holding only the given number of agents.
pub fn store_with_agents(count: usize) -> DataStore {
    DataStore::new(SeedData {
        agents: sample_agents(count),
        ..SeedData::default()
    })
}
