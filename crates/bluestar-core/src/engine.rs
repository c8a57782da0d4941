//! Turn execution: the request loop against the chat endpoint.

use crate::dispatch::{dispatch, lookup_tool_spec};
use crate::error::EngineError;
use crate::transcript::Transcript;
use bluestar_config::ChatConfig;
use bluestar_llm::ChatEndpoint;
use bluestar_protocol::{
    ConversationId, EventMsg, EventPayload, EventSink, Message, TurnId,
};
use bluestar_store::DataStore;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;
use uuid::Uuid;

/// Assistant text used when the model answers with neither text nor calls.
pub const EMPTY_REPLY_NOTICE: &str = "The AI provided an empty response.";

/// Assistant text appended when the endpoint cannot be reached.
pub const CONNECTIVITY_NOTICE: &str = "I am currently unable to connect to my AI service. \
Please check the API configuration and network connection.";

/// Assistant text appended when the tool-call round cap is exhausted.
pub const EXHAUSTED_NOTICE: &str = "I was unable to resolve that request after several data \
lookups. Please try again or rephrase the question.";

/// Engine state over one conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// No turn in flight; `submit` is accepted.
    Idle,
    /// An endpoint call is outstanding.
    AwaitingModel,
    /// A tool invocation is being executed locally.
    DispatchingTool,
}

/// How a submitted turn resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The model produced a final text reply.
    Completed { reply: String },
    /// The turn ended without a usable reply; the transcript carries an
    /// assistant-visible notice and the message describes the cause.
    Failed { message: String },
    /// The caller cancelled the turn; the transcript was rolled back.
    Cancelled,
}

/// Conversational tool-calling engine.
///
/// Owns one transcript and drives the exchange between the user, the chat
/// endpoint, and the local data lookup. One turn at a time: a `submit` while
/// a turn is in flight is rejected without mutating any state.
pub struct AssistantEngine {
    conversation_id: ConversationId,
    chat: ChatConfig,
    endpoint: Arc<dyn ChatEndpoint>,
    store: Arc<DataStore>,
    sink: Option<Arc<dyn EventSink>>,
    transcript: Mutex<Transcript>,
    phase: Mutex<TurnPhase>,
    cancelled: AtomicBool,
    cancel_notify: Notify,
}

impl AssistantEngine {
    /// Create an engine with a freshly seeded transcript.
    pub fn new(chat: ChatConfig, endpoint: Arc<dyn ChatEndpoint>, store: Arc<DataStore>) -> Self {
        let transcript = Transcript::new(&chat.system_prompt, Some(&chat.greeting));
        Self {
            conversation_id: Uuid::new_v4(),
            chat,
            endpoint,
            store,
            sink: None,
            transcript: Mutex::new(transcript),
            phase: Mutex::new(TurnPhase::Idle),
            cancelled: AtomicBool::new(false),
            cancel_notify: Notify::new(),
        }
    }

    /// Attach an event sink for turn lifecycle notifications.
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Identifier of this conversation.
    pub fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        *self.phase.lock()
    }

    /// Cloned read-only view of the transcript, for rendering.
    pub fn transcript(&self) -> Vec<Message> {
        self.transcript.lock().messages().to_vec()
    }

    /// Abort the in-flight turn, if any.
    ///
    /// The cancelled turn rolls its transcript back to the state before the
    /// cancelled utterance, so no unresolved invocations remain.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.cancel_notify.notify_waiters();
    }

    /// Run one turn: append the utterance, loop through tool rounds, and
    /// resolve to an outcome. Misuse is rejected before any state changes.
    pub async fn submit(&self, text: &str) -> Result<TurnOutcome, EngineError> {
        let utterance = text.trim();
        if utterance.is_empty() {
            return Err(EngineError::EmptyUtterance);
        }
        if utterance.chars().count() > self.chat.max_utterance_chars {
            return Err(EngineError::UtteranceTooLong(self.chat.max_utterance_chars));
        }
        {
            let mut phase = self.phase.lock();
            if *phase != TurnPhase::Idle {
                return Err(EngineError::TurnInFlight);
            }
            *phase = TurnPhase::AwaitingModel;
        }
        self.cancelled.store(false, Ordering::SeqCst);

        let turn_id = Uuid::new_v4();
        let rollback_len = {
            let mut transcript = self.transcript.lock();
            let len = transcript.len();
            transcript.push(Message::user(utterance));
            len
        };
        info!(
            "starting turn (conversation_id={}, turn_id={}, utterance_len={})",
            self.conversation_id,
            turn_id,
            utterance.len()
        );
        self.emit(EventPayload::TurnStarted { turn_id });

        let outcome = self.run_request_loop(turn_id, rollback_len).await;
        *self.phase.lock() = TurnPhase::Idle;

        match &outcome {
            TurnOutcome::Completed { reply } => {
                info!(
                    "completed turn (conversation_id={}, turn_id={}, reply_len={})",
                    self.conversation_id,
                    turn_id,
                    reply.len()
                );
                self.emit(EventPayload::TurnCompleted {
                    turn_id,
                    reply: reply.clone(),
                });
            }
            TurnOutcome::Failed { message } => {
                error!(
                    "turn failed (conversation_id={}, turn_id={}): {}",
                    self.conversation_id, turn_id, message
                );
                self.emit(EventPayload::TurnFailed {
                    turn_id,
                    message: message.clone(),
                });
            }
            TurnOutcome::Cancelled => {
                info!(
                    "turn cancelled (conversation_id={}, turn_id={})",
                    self.conversation_id, turn_id
                );
                self.emit(EventPayload::TurnCancelled { turn_id });
            }
        }
        Ok(outcome)
    }

    async fn run_request_loop(&self, turn_id: TurnId, rollback_len: usize) -> TurnOutcome {
        let tools = [lookup_tool_spec()];
        let mut rounds = 0usize;

        loop {
            if self.cancelled.load(Ordering::SeqCst) {
                return self.roll_back(rollback_len);
            }
            let wire = {
                let transcript = self.transcript.lock();
                debug_assert!(
                    transcript.unresolved_invocations().is_empty(),
                    "transcript sent with unresolved invocations"
                );
                transcript.to_wire()
            };
            *self.phase.lock() = TurnPhase::AwaitingModel;
            debug!(
                "requesting completion (turn_id={}, rounds={}, messages={})",
                turn_id,
                rounds,
                wire.len()
            );

            let result = tokio::select! {
                _ = self.cancel_notify.notified() => return self.roll_back(rollback_len),
                result = self.endpoint.complete(&wire, &tools) => result,
            };
            if self.cancelled.load(Ordering::SeqCst) {
                return self.roll_back(rollback_len);
            }

            let reply = match result {
                Ok(reply) => reply,
                Err(err) => {
                    // The partial reply is discarded wholesale, so no
                    // dangling invocation can enter the transcript.
                    self.transcript
                        .lock()
                        .push(Message::assistant_text(CONNECTIVITY_NOTICE));
                    return TurnOutcome::Failed {
                        message: err.to_string(),
                    };
                }
            };

            if reply.tool_calls.is_empty() {
                return match reply.text {
                    Some(text) if !text.is_empty() => {
                        self.transcript
                            .lock()
                            .push(Message::assistant_text(text.clone()));
                        TurnOutcome::Completed { reply: text }
                    }
                    _ => {
                        self.transcript
                            .lock()
                            .push(Message::assistant_text(EMPTY_REPLY_NOTICE));
                        TurnOutcome::Completed {
                            reply: EMPTY_REPLY_NOTICE.to_string(),
                        }
                    }
                };
            }

            rounds += 1;
            if rounds > self.chat.max_tool_rounds {
                warn!(
                    "tool-call rounds exhausted (turn_id={}, max={})",
                    turn_id, self.chat.max_tool_rounds
                );
                self.transcript
                    .lock()
                    .push(Message::assistant_text(EXHAUSTED_NOTICE));
                return TurnOutcome::Failed {
                    message: format!(
                        "unable to resolve the request within {} tool-call rounds",
                        self.chat.max_tool_rounds
                    ),
                };
            }

            *self.phase.lock() = TurnPhase::DispatchingTool;
            if reply.tool_calls.len() > 1 {
                warn!(
                    "reply carried {} tool calls; only the first is executed (turn_id={})",
                    reply.tool_calls.len(),
                    turn_id
                );
            }
            let first = reply.tool_calls[0].clone();
            self.transcript
                .lock()
                .push(Message::assistant_reply(reply.text, reply.tool_calls.clone()));

            self.emit(EventPayload::ToolCallStarted {
                turn_id,
                invocation_id: first.id.clone(),
                tool_name: first.name.clone(),
                arguments: first.arguments.clone(),
            });
            let result = dispatch(&first, &self.store);
            if let Message::Tool { payload, .. } = &result {
                self.emit(EventPayload::ToolCallFinished {
                    turn_id,
                    invocation_id: first.id.clone(),
                    payload: payload.clone(),
                });
            }

            let mut transcript = self.transcript.lock();
            transcript.push(result);
            // Extra simultaneous calls are answered but never executed, so
            // the invocation/result pairing stays intact for the next round.
            for skipped in &reply.tool_calls[1..] {
                transcript.push(Message::tool_result(
                    skipped.id.clone(),
                    json!({
                        "error": "Parallel tool calls are not supported; this call was not executed."
                    })
                    .to_string(),
                ));
            }
        }
    }

    fn roll_back(&self, rollback_len: usize) -> TurnOutcome {
        self.transcript.lock().truncate(rollback_len);
        TurnOutcome::Cancelled
    }

    fn emit(&self, payload: EventPayload) {
        let Some(sink) = &self.sink else {
            return;
        };
        sink.emit(EventMsg {
            id: Uuid::new_v4(),
            conversation_id: self.conversation_id,
            created_at: chrono::Utc::now(),
            payload,
        });
    }
}
