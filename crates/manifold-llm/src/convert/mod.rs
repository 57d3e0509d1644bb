//! Conversion from canonical parameters to provider wire payloads
//!
//! One module per provider; this module dispatches on the provider tag and
//! enforces the capability guards before any payload is built.

pub mod ai21;
pub mod anthropic;
pub mod cohere;
pub mod titan;

use serde_json::Value;

use crate::error::LlmError;
use crate::provider::{self, Operation, Provider};
use crate::types::{ChatParams, InferenceParams};

/// Build the wire payload for a single-shot completion
///
/// Fails before any network interaction when the provider cannot complete or
/// the model only exposes the messages interface.
pub fn completion_request(
    provider: Provider,
    model_id: &str,
    prompt: &str,
    params: &InferenceParams,
) -> Result<Value, LlmError> {
    if !provider.supports(Operation::Completion) {
        return Err(LlmError::UnsupportedProvider {
            provider,
            operation: Operation::Completion,
        });
    }
    if provider::is_chat_only(model_id) {
        return Err(LlmError::UnsupportedModel {
            model: model_id.to_owned(),
        });
    }

    let payload = match provider {
        Provider::Anthropic => serde_json::to_value(anthropic::completion_request(prompt, params))?,
        Provider::Cohere => serde_json::to_value(cohere::generate_request(prompt, params))?,
        Provider::Ai21 => serde_json::to_value(ai21::complete_request(prompt, params))?,
        Provider::Amazon => serde_json::to_value(titan::text_request(prompt, params))?,
    };
    Ok(payload)
}

/// Build the wire payload for a multi-turn chat request
///
/// Fails before any network interaction when the provider has no messages
/// interface or `messages` is empty.
pub fn chat_request(provider: Provider, params: &ChatParams) -> Result<Value, LlmError> {
    if params.messages.is_empty() {
        return Err(LlmError::InvalidRequest("messages must not be empty".to_owned()));
    }
    if !provider.supports(Operation::Chat) {
        return Err(LlmError::UnsupportedProvider {
            provider,
            operation: Operation::Chat,
        });
    }

    let payload = serde_json::to_value(anthropic::messages_request(params))?;
    Ok(payload)
}
