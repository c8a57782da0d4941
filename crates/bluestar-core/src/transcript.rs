//! Transcript ownership and the outbound wire view.

use bluestar_llm::{WireFunctionCall, WireMessage, WireRole, WireToolCall};
use bluestar_protocol::{Message, ToolInvocation};
use std::collections::HashSet;

/// Ordered message sequence owned by one engine instance.
///
/// Append-only while a turn is running; `truncate` exists solely so a
/// cancelled turn can roll back to its pre-turn length.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Seed a transcript with the system directive and optional greeting.
    pub fn new(system_prompt: &str, greeting: Option<&str>) -> Self {
        let mut messages = vec![Message::system(system_prompt)];
        if let Some(greeting) = greeting.filter(|text| !text.is_empty()) {
            messages.push(Message::assistant_text(greeting));
        }
        Self { messages }
    }

    /// Read-only view of the messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages held.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop every message past `len`; used for cancellation rollback.
    pub fn truncate(&mut self, len: usize) {
        self.messages.truncate(len);
    }

    /// Invocations that have no matching tool result yet.
    ///
    /// The request loop must drain this to empty before every outbound call.
    pub fn unresolved_invocations(&self) -> Vec<&ToolInvocation> {
        let resolved: HashSet<&str> = self
            .messages
            .iter()
            .filter_map(|message| match message {
                Message::Tool { invocation_id, .. } => Some(invocation_id.as_str()),
                _ => None,
            })
            .collect();

        self.messages
            .iter()
            .filter_map(|message| match message {
                Message::Assistant { invocations, .. } => Some(invocations.iter()),
                _ => None,
            })
            .flatten()
            .filter(|invocation| !resolved.contains(invocation.id.as_str()))
            .collect()
    }

    /// Reduce the transcript to outbound wire messages.
    ///
    /// Local bookkeeping (timestamps) is stripped; roles, content, tool
    /// calls, and tool-call ids are preserved.
    pub fn to_wire(&self) -> Vec<WireMessage> {
        self.messages
            .iter()
            .map(|message| match message {
                Message::System { text } => WireMessage::text(WireRole::System, text.clone()),
                Message::User { text, .. } => WireMessage::text(WireRole::User, text.clone()),
                Message::Assistant {
                    text, invocations, ..
                } => WireMessage {
                    role: WireRole::Assistant,
                    content: text.clone(),
                    tool_calls: if invocations.is_empty() {
                        None
                    } else {
                        Some(invocations.iter().map(wire_tool_call).collect())
                    },
                    tool_call_id: None,
                },
                Message::Tool {
                    invocation_id,
                    payload,
                    ..
                } => WireMessage {
                    role: WireRole::Tool,
                    content: Some(payload.clone()),
                    tool_calls: None,
                    tool_call_id: Some(invocation_id.clone()),
                },
            })
            .collect()
    }
}

fn wire_tool_call(invocation: &ToolInvocation) -> WireToolCall {
    WireToolCall {
        id: invocation.id.clone(),
        call_type: "function".to_string(),
        function: WireFunctionCall {
            name: invocation.name.clone(),
            arguments: invocation.arguments.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn invocation(id: &str) -> ToolInvocation {
        ToolInvocation {
            id: id.to_string(),
            name: "lookupData".to_string(),
            arguments: "{\"entity\":\"agents\"}".to_string(),
        }
    }

    #[test]
    fn new_transcript_starts_with_system_then_greeting() {
        let transcript = Transcript::new("rules", Some("hello"));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0], Message::system("rules"));
        assert!(matches!(
            &transcript.messages()[1],
            Message::Assistant { text: Some(text), .. } if text == "hello"
        ));
    }

    #[test]
    fn empty_greeting_is_skipped() {
        assert_eq!(Transcript::new("rules", Some("")).len(), 1);
        assert_eq!(Transcript::new("rules", None).len(), 1);
    }

    #[test]
    fn unresolved_invocations_tracks_pairing() {
        let mut transcript = Transcript::new("rules", None);
        transcript.push(Message::user("count agents"));
        transcript.push(Message::assistant_reply(
            None,
            vec![invocation("call_1"), invocation("call_2")],
        ));
        let unresolved: Vec<&str> = transcript
            .unresolved_invocations()
            .iter()
            .map(|inv| inv.id.as_str())
            .collect();
        assert_eq!(unresolved, vec!["call_1", "call_2"]);

        transcript.push(Message::tool_result("call_1", "{}"));
        let unresolved: Vec<&str> = transcript
            .unresolved_invocations()
            .iter()
            .map(|inv| inv.id.as_str())
            .collect();
        assert_eq!(unresolved, vec!["call_2"]);

        transcript.push(Message::tool_result("call_2", "{}"));
        assert!(transcript.unresolved_invocations().is_empty());
    }

    #[test]
    fn wire_view_strips_metadata_and_keeps_pairing() {
        let mut transcript = Transcript::new("rules", None);
        transcript.push(Message::user("count agents"));
        transcript.push(Message::assistant_reply(None, vec![invocation("call_1")]));
        transcript.push(Message::tool_result("call_1", "{\"count\":3}"));

        let wire = transcript.to_wire();
        assert_eq!(wire.len(), 4);
        assert_eq!(wire[0], WireMessage::text(WireRole::System, "rules"));
        assert_eq!(wire[1], WireMessage::text(WireRole::User, "count agents"));

        assert_eq!(wire[2].role, WireRole::Assistant);
        assert_eq!(wire[2].content, None);
        let calls = wire[2].tool_calls.as_ref().expect("tool calls");
        assert_eq!(calls[0].id, "call_1");
        assert_eq!(calls[0].call_type, "function");
        assert_eq!(calls[0].function.name, "lookupData");

        assert_eq!(wire[3].role, WireRole::Tool);
        assert_eq!(wire[3].tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(wire[3].content.as_deref(), Some("{\"count\":3}"));

        // Timestamps never reach the wire shape.
        let encoded = serde_json::to_value(&wire).expect("serialize");
        assert!(encoded.to_string().find("created_at").is_none());
    }

    #[test]
    fn truncate_rolls_back_to_a_prior_length() {
        let mut transcript = Transcript::new("rules", None);
        let rollback = transcript.len();
        transcript.push(Message::user("count agents"));
        transcript.push(Message::assistant_reply(None, vec![invocation("call_1")]));
        transcript.truncate(rollback);
        assert_eq!(transcript.len(), 1);
        assert!(transcript.unresolved_invocations().is_empty());
    }
}
