//! OpenAI-compatible chat-completion wire types.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Speaker role on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    System,
    User,
    Assistant,
    Tool,
}

/// One outbound or inbound chat message, metadata already stripped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireMessage {
    pub role: WireRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl WireMessage {
    /// Plain role/content message with no tool fields.
    pub fn text(role: WireRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }
}

/// A tool call as carried in assistant wire messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: WireFunctionCall,
}

/// Function name plus raw JSON argument text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireFunctionCall {
    pub name: String,
    pub arguments: String,
}

/// Tool metadata attached to every outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    /// Tool name.
    pub name: String,
    /// Tool description shown to the model.
    pub description: String,
    /// JSON schema for tool arguments.
    pub parameters: Value,
}

impl ToolSpec {
    /// Render the spec in the `{"type": "function", ...}` wire envelope.
    pub fn to_wire(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters,
            }
        })
    }
}

/// Request body for a chat-completion call.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [WireMessage],
    pub tools: Vec<Value>,
}

/// Top-level chat-completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One response choice; only the first is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

/// The message inside a response choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<WireToolCall>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_message_omits_tool_fields() {
        let encoded =
            serde_json::to_value(WireMessage::text(WireRole::User, "hi")).expect("serialize");
        assert_eq!(encoded, json!({ "role": "user", "content": "hi" }));
    }

    #[test]
    fn tool_result_message_carries_call_id() {
        let message = WireMessage {
            role: WireRole::Tool,
            content: Some("{\"count\":3}".to_string()),
            tool_calls: None,
            tool_call_id: Some("call_1".to_string()),
        };
        let encoded = serde_json::to_value(&message).expect("serialize");
        assert_eq!(
            encoded,
            json!({
                "role": "tool",
                "content": "{\"count\":3}",
                "tool_call_id": "call_1",
            })
        );
    }

    #[test]
    fn tool_spec_renders_function_envelope() {
        let spec = ToolSpec {
            name: "lookupData".to_string(),
            description: "Retrieves data.".to_string(),
            parameters: json!({ "type": "object" }),
        };
        assert_eq!(
            spec.to_wire(),
            json!({
                "type": "function",
                "function": {
                    "name": "lookupData",
                    "description": "Retrieves data.",
                    "parameters": { "type": "object" },
                }
            })
        );
    }

    #[test]
    fn response_parses_tool_calls() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": { "name": "lookupData", "arguments": "{\"entity\":\"agents\"}" }
                    }]
                }
            }]
        }))
        .expect("deserialize");
        let calls = response.choices[0]
            .message
            .tool_calls
            .as_ref()
            .expect("tool calls");
        assert_eq!(calls[0].id, "call_1");
        assert_eq!(calls[0].function.name, "lookupData");
    }

    #[test]
    fn response_tolerates_missing_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({})).expect("deserialize");
        assert!(response.choices.is_empty());
    }
}
