//! Mock `ChatEndpoint` implementations.

use async_trait::async_trait;
use bluestar_llm::{ChatEndpoint, EndpointError, EndpointReply, ToolSpec, WireMessage};
use bluestar_protocol::ToolInvocation;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Endpoint that replays a fixed script of replies in order.
///
/// Records every outbound payload so tests can assert on what the engine
/// actually sent. Clones share the script and the recordings.
#[derive(Clone, Default)]
pub struct ScriptedEndpoint {
    script: Arc<Mutex<VecDeque<Result<EndpointReply, EndpointError>>>>,
    /// Wire messages of each request, in call order.
    pub requests: Arc<Mutex<Vec<Vec<WireMessage>>>>,
    /// Tool names attached to the most recent request.
    pub seen_tools: Arc<Mutex<Vec<String>>>,
}

impl ScriptedEndpoint {
    /// Create an endpoint with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a plain text reply.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.script.lock().push_back(Ok(EndpointReply {
            text: Some(text.into()),
            tool_calls: Vec::new(),
        }));
        self
    }

    /// Queue a reply requesting a single tool call.
    pub fn with_tool_call(
        self,
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        self.script.lock().push_back(Ok(EndpointReply {
            text: None,
            tool_calls: vec![ToolInvocation {
                id: id.into(),
                name: name.into(),
                arguments: arguments.into(),
            }],
        }));
        self
    }

    /// Queue an arbitrary reply.
    pub fn with_reply(self, reply: EndpointReply) -> Self {
        self.script.lock().push_back(Ok(reply));
        self
    }

    /// Queue a reply with neither text nor tool calls.
    pub fn with_empty(self) -> Self {
        self.script.lock().push_back(Ok(EndpointReply::default()));
        self
    }

    /// Queue an error.
    pub fn with_error(self, error: EndpointError) -> Self {
        self.script.lock().push_back(Err(error));
        self
    }
}

#[async_trait]
impl ChatEndpoint for ScriptedEndpoint {
    async fn complete(
        &self,
        messages: &[WireMessage],
        tools: &[ToolSpec],
    ) -> Result<EndpointReply, EndpointError> {
        self.requests.lock().push(messages.to_vec());
        *self.seen_tools.lock() = tools.iter().map(|tool| tool.name.clone()).collect();
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(EndpointError::Malformed("endpoint script exhausted".into())))
    }
}

/// Endpoint that requests the same tool call on every round, forever.
#[derive(Clone)]
pub struct RepeatingToolCallEndpoint {
    name: String,
    arguments: String,
    /// Number of completions served so far.
    pub calls: Arc<AtomicUsize>,
}

impl RepeatingToolCallEndpoint {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ChatEndpoint for RepeatingToolCallEndpoint {
    async fn complete(
        &self,
        _messages: &[WireMessage],
        _tools: &[ToolSpec],
    ) -> Result<EndpointReply, EndpointError> {
        let round = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(EndpointReply {
            text: None,
            tool_calls: vec![ToolInvocation {
                id: format!("call_{round}"),
                name: self.name.clone(),
                arguments: self.arguments.clone(),
            }],
        })
    }
}

/// Endpoint that always fails with an HTTP-style error.
#[derive(Clone)]
pub struct FailingEndpoint {
    message: String,
}

impl FailingEndpoint {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ChatEndpoint for FailingEndpoint {
    async fn complete(
        &self,
        _messages: &[WireMessage],
        _tools: &[ToolSpec],
    ) -> Result<EndpointReply, EndpointError> {
        Err(EndpointError::Status {
            status: 503,
            body: self.message.clone(),
        })
    }
}

/// Endpoint that blocks inside `complete` until the test releases it.
///
/// Lets tests hold a turn in flight deterministically, for reentrancy and
/// cancellation scenarios.
#[derive(Clone, Default)]
pub struct GatedEndpoint {
    started: Arc<Notify>,
    release: Arc<Notify>,
    reply: Arc<Mutex<Option<EndpointReply>>>,
}

impl GatedEndpoint {
    /// Create an endpoint that replies with the given text once released.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
            reply: Arc::new(Mutex::new(Some(EndpointReply {
                text: Some(text.into()),
                tool_calls: Vec::new(),
            }))),
        }
    }

    /// Wait until the engine's request has reached the endpoint.
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Allow the pending `complete` call to return.
    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl ChatEndpoint for GatedEndpoint {
    async fn complete(
        &self,
        _messages: &[WireMessage],
        _tools: &[ToolSpec],
    ) -> Result<EndpointReply, EndpointError> {
        self.started.notify_one();
        self.release.notified().await;
        self.reply
            .lock()
            .take()
            .ok_or_else(|| EndpointError::Malformed("gated reply already consumed".into()))
    }
}
