//! Request dispatcher
//!
//! Derives the provider from the configured model id, normalizes canonical
//! parameters into the provider's wire payload, and drives the invocation
//! endpoint, single-shot or streaming with reassembly.

use std::fmt;
use std::sync::Arc;

use futures_util::StreamExt;

use crate::assemble::MessageAssembler;
use crate::config::ClientConfig;
use crate::convert;
use crate::error::LlmError;
use crate::protocol::anthropic::StreamEvent;
use crate::provider::Provider;
use crate::response::{ChatResponse, CompletionResponse, parse_chat};
use crate::runtime::{BedrockRuntime, ModelRuntime};
use crate::types::{ChatParams, InferenceParams};

/// Request and response bodies are always JSON
const CONTENT_TYPE_JSON: &str = "application/json";

/// Unified client over the Bedrock text-generation providers
pub struct Client {
    model: String,
    provider: Provider,
    defaults: InferenceParams,
    runtime: Arc<dyn ModelRuntime>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("model", &self.model)
            .field("provider", &self.provider)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client over the production Bedrock runtime
    pub async fn new(config: ClientConfig) -> Result<Self, LlmError> {
        let runtime = BedrockRuntime::new(&config.aws).await;
        Self::with_runtime(config, Arc::new(runtime))
    }

    /// Build a client over any runtime implementation
    pub fn with_runtime(config: ClientConfig, runtime: Arc<dyn ModelRuntime>) -> Result<Self, LlmError> {
        let provider = Provider::from_model_id(&config.model)?;
        Ok(Self {
            model: config.model,
            provider,
            defaults: config.defaults,
            runtime,
        })
    }

    /// Configured model id
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Provider derived from the configured model id
    pub const fn provider(&self) -> Provider {
        self.provider
    }

    /// Single-shot text completion
    ///
    /// Instance defaults merge under `overrides` (overrides win per field),
    /// the prompt is wrapped per provider convention, and the response is
    /// decoded into the provider's wrapper type.
    pub async fn complete(
        &self,
        prompt: &str,
        overrides: &InferenceParams,
    ) -> Result<CompletionResponse, LlmError> {
        let params = self.defaults.merged_with(overrides);
        let payload = convert::completion_request(self.provider, &self.model, prompt, &params)?;
        let body = serde_json::to_vec(&payload)?;

        tracing::debug!(model = %self.model, provider = %self.provider, "sending completion request");
        let raw = self
            .runtime
            .invoke(&self.model, body, CONTENT_TYPE_JSON, CONTENT_TYPE_JSON)
            .await?;

        CompletionResponse::parse(self.provider, &raw)
    }

    /// Multi-turn chat, answered in one shot
    pub async fn chat(&self, params: &ChatParams) -> Result<ChatResponse, LlmError> {
        let (model, body) = self.prepare_chat(params)?;

        tracing::debug!(model = %model, "sending chat request");
        let raw = self
            .runtime
            .invoke(&model, body, CONTENT_TYPE_JSON, CONTENT_TYPE_JSON)
            .await?;

        parse_chat(&raw)
    }

    /// Multi-turn chat, streamed
    ///
    /// Every decoded event is handed to `on_event` in arrival order before
    /// being folded into the reassembled response. A stream that fails
    /// mid-sequence yields the error; partial state is discarded and never
    /// returned as a response.
    pub async fn chat_stream<F>(&self, params: &ChatParams, mut on_event: F) -> Result<ChatResponse, LlmError>
    where
        F: FnMut(&StreamEvent),
    {
        let (model, body) = self.prepare_chat(params)?;

        tracing::debug!(model = %model, "sending streaming chat request");
        let mut chunks = self
            .runtime
            .invoke_stream(&model, body, CONTENT_TYPE_JSON, CONTENT_TYPE_JSON)
            .await?;

        let mut assembler = MessageAssembler::new();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk?;
            if chunk.is_empty() {
                continue;
            }
            let event: StreamEvent = serde_json::from_slice(&chunk)
                .map_err(|e| LlmError::MalformedStream(format!("undecodable stream event: {e}")))?;
            on_event(&event);
            assembler.apply(&event)?;
        }

        assembler.finish()
    }

    /// Validate a chat request and build its wire body
    ///
    /// A model override in the params may retarget the call, so the provider
    /// is re-derived from the effective model id.
    fn prepare_chat(&self, params: &ChatParams) -> Result<(String, Vec<u8>), LlmError> {
        let model = params.model.clone().unwrap_or_else(|| self.model.clone());
        let provider = Provider::from_model_id(&model)?;
        let payload = convert::chat_request(provider, params)?;
        let body = serde_json::to_vec(&payload)?;
        Ok((model, body))
    }
}
