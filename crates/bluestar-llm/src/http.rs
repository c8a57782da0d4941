//! HTTP client for OpenAI-compatible chat-completion endpoints.

use crate::endpoint::{ChatEndpoint, EndpointReply};
use crate::error::EndpointError;
use crate::wire::{ChatCompletionResponse, ChatRequest, ToolSpec, WireMessage};
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

/// Client for a bearer-authenticated chat-completions URL.
///
/// Works against any OpenAI-compatible endpoint (Gemini's compatibility
/// surface, OpenAI, Groq, local servers).
pub struct HttpChatEndpoint {
    url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl HttpChatEndpoint {
    /// Build a client with a per-request timeout.
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EndpointError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }

    /// Model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatEndpoint for HttpChatEndpoint {
    async fn complete(
        &self,
        messages: &[WireMessage],
        tools: &[ToolSpec],
    ) -> Result<EndpointReply, EndpointError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            tools: tools.iter().map(ToolSpec::to_wire).collect(),
        };
        debug!(
            "calling chat endpoint (model={}, messages={}, tools={})",
            self.model,
            messages.len(),
            tools.len()
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EndpointError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| EndpointError::Malformed(err.to_string()))?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| EndpointError::Malformed("response contained no choices".to_string()))?;
        Ok(EndpointReply::from(choice.message))
    }
}
