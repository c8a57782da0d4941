//! Tool dispatch: resolve a model invocation into a tool result message.

use bluestar_llm::ToolSpec;
use bluestar_protocol::{Message, ToolInvocation};
use bluestar_store::{DataStore, Entity};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;

/// Name of the single tool exposed to the model.
pub const LOOKUP_TOOL_NAME: &str = "lookupData";

/// Arguments accepted by the lookup tool.
#[derive(Debug, Deserialize)]
struct LookupArgs {
    entity: String,
}

/// Static specification for the lookup tool; the set of entities is closed.
pub fn lookup_tool_spec() -> ToolSpec {
    ToolSpec {
        name: LOOKUP_TOOL_NAME.to_string(),
        description:
            "Retrieves real-time data from the POS tracking system for a specified entity."
                .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "entity": {
                    "type": "string",
                    "description": "The name of the entity table to query. Must be one of: \
\"supervisors\", \"agents\", \"pos_devices\", or \"alerts\".",
                }
            },
            "required": ["entity"],
        }),
    }
}

/// Execute one invocation against the store.
///
/// Never fails outward: unknown tools, unparsable arguments, and unknown
/// entities all come back as error-object payloads the model can read, so
/// the request loop can always continue.
pub fn dispatch(invocation: &ToolInvocation, store: &DataStore) -> Message {
    let payload = dispatch_payload(invocation, store);
    Message::tool_result(invocation.id.clone(), payload)
}

fn dispatch_payload(invocation: &ToolInvocation, store: &DataStore) -> String {
    if invocation.name != LOOKUP_TOOL_NAME {
        warn!(
            "unknown tool requested (name={}, invocation_id={})",
            invocation.name, invocation.id
        );
        return error_payload(format!("Unknown function: {}", invocation.name));
    }

    let args: LookupArgs = match serde_json::from_str(&invocation.arguments) {
        Ok(args) => args,
        Err(err) => {
            warn!(
                "invalid tool arguments (invocation_id={}): {}",
                invocation.id, err
            );
            return error_payload("Invalid arguments provided for lookupData.".to_string());
        }
    };

    let entity: Entity = match args.entity.parse() {
        Ok(entity) => entity,
        Err(err) => {
            warn!(
                "unknown entity requested (entity={}, invocation_id={})",
                args.entity, invocation.id
            );
            return error_payload(err.to_string());
        }
    };

    let report = store.lookup(entity);
    debug!(
        "dispatched lookup (entity={}, count={}, invocation_id={})",
        entity, report.count, invocation.id
    );
    serde_json::to_string(&report)
        .unwrap_or_else(|_| error_payload("Failed to serialize lookup result.".to_string()))
}

fn error_payload(message: String) -> String {
    json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn invocation(name: &str, arguments: &str) -> ToolInvocation {
        ToolInvocation {
            id: "call_1".to_string(),
            name: name.to_string(),
            arguments: arguments.to_string(),
        }
    }

    fn payload_of(message: Message) -> Value {
        match message {
            Message::Tool {
                invocation_id,
                payload,
                ..
            } => {
                assert_eq!(invocation_id, "call_1");
                serde_json::from_str(&payload).expect("payload is JSON")
            }
            other => panic!("expected tool message, got {other:?}"),
        }
    }

    #[test]
    fn unknown_tool_yields_error_payload() {
        let store = DataStore::default();
        let payload = payload_of(dispatch(&invocation("deleteData", "{}"), &store));
        assert_eq!(payload["error"], "Unknown function: deleteData");
    }

    #[test]
    fn unparsable_arguments_yield_error_payload() {
        let store = DataStore::default();
        let payload = payload_of(dispatch(&invocation(LOOKUP_TOOL_NAME, "not json"), &store));
        assert_eq!(payload["error"], "Invalid arguments provided for lookupData.");
    }

    #[test]
    fn missing_entity_field_yields_error_payload() {
        let store = DataStore::default();
        let payload = payload_of(dispatch(&invocation(LOOKUP_TOOL_NAME, "{}"), &store));
        assert_eq!(payload["error"], "Invalid arguments provided for lookupData.");
    }

    #[test]
    fn unknown_entity_yields_error_payload() {
        let store = DataStore::default();
        let payload = payload_of(dispatch(
            &invocation(LOOKUP_TOOL_NAME, "{\"entity\":\"devices\"}"),
            &store,
        ));
        assert_eq!(payload["error"], "Entity 'devices' not found or not supported.");
    }

    #[test]
    fn successful_lookup_returns_report_payload() {
        let store = DataStore::demo();
        let payload = payload_of(dispatch(
            &invocation(LOOKUP_TOOL_NAME, "{\"entity\":\"agents\"}"),
            &store,
        ));
        assert_eq!(payload["count"], 3);
        assert_eq!(payload["summary"].as_array().expect("summary").len(), 3);
        assert_eq!(payload.get("note"), None);
    }

    #[test]
    fn tool_spec_names_the_closed_entity_set() {
        let spec = lookup_tool_spec();
        assert_eq!(spec.name, LOOKUP_TOOL_NAME);
        let description = spec.parameters["properties"]["entity"]["description"]
            .as_str()
            .expect("description");
        for entity in Entity::ALL {
            assert!(description.contains(entity.as_str()));
        }
    }
}
