//! Transcript and event types shared across the Blue Star assistant crates.

mod message;

pub use message::{Message, ToolInvocation};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a conversation.
pub type ConversationId = Uuid;
/// Unique identifier for a turn.
pub type TurnId = Uuid;

/// Wrapper for events emitted during a conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMsg {
    /// Unique id for the event.
    pub id: Uuid,
    /// Conversation the event belongs to.
    pub conversation_id: ConversationId,
    /// Timestamp when the event was created.
    pub created_at: DateTime<Utc>,
    /// Event payload content.
    pub payload: EventPayload,
}

/// All events emitted by the engine over a turn's lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type", content = "payload")]
pub enum EventPayload {
    /// A user utterance was accepted and the turn started.
    TurnStarted { turn_id: TurnId },
    /// The turn resolved to a final assistant reply.
    TurnCompleted { turn_id: TurnId, reply: String },
    /// The turn ended without a usable reply.
    TurnFailed { turn_id: TurnId, message: String },
    /// The turn was cancelled by the caller.
    TurnCancelled { turn_id: TurnId },
    /// A tool invocation is being dispatched.
    ToolCallStarted {
        turn_id: TurnId,
        invocation_id: String,
        tool_name: String,
        arguments: String,
    },
    /// A tool invocation produced its result payload.
    ToolCallFinished {
        turn_id: TurnId,
        invocation_id: String,
        payload: String,
    },
}

/// Sink interface for engine lifecycle events.
pub trait EventSink: Send + Sync {
    /// Emit an event to downstream listeners.
    fn emit(&self, event: EventMsg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn event_payload_round_trips_through_json() {
        let event = EventMsg {
            id: Uuid::new_v4(),
            conversation_id: Uuid::new_v4(),
            created_at: Utc::now(),
            payload: EventPayload::ToolCallFinished {
                turn_id: Uuid::new_v4(),
                invocation_id: "call_1".to_string(),
                payload: "{\"count\":3}".to_string(),
            },
        };
        let encoded = serde_json::to_value(&event).expect("serialize");
        let decoded: EventMsg = serde_json::from_value(encoded.clone()).expect("deserialize");
        let decoded_value = serde_json::to_value(decoded).expect("serialize decoded");
        assert_eq!(decoded_value, encoded);
    }

    #[test]
    fn event_payload_uses_snake_case_tags() {
        let payload = EventPayload::TurnFailed {
            turn_id: Uuid::nil(),
            message: "endpoint unreachable".to_string(),
        };
        let encoded = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            encoded,
            json!({
                "type": "turn_failed",
                "payload": {
                    "turn_id": Uuid::nil(),
                    "message": "endpoint unreachable",
                }
            })
        );
    }
}
