//! Typed caller-facing responses
//!
//! Pure construction: the parser picks the provider's wrapper type and hands
//! it the decoded body verbatim. No field is transformed.

use crate::error::LlmError;
use crate::protocol::{ai21, anthropic, cohere, titan};
use crate::provider::Provider;

/// Completed chat message returned by the messages interface
pub type ChatResponse = anthropic::MessageResponse;

/// Single-shot completion response, one typed variant per provider
#[derive(Debug, Clone)]
pub enum CompletionResponse {
    /// Anthropic text completion
    Anthropic(anthropic::Completion),
    /// Cohere generation
    Cohere(cohere::GenerateResponse),
    /// AI21 completion
    Ai21(ai21::CompleteResponse),
    /// Amazon Titan result
    Amazon(titan::TextResponse),
}

impl CompletionResponse {
    /// Decode a raw response body into the provider's wrapper type
    pub fn parse(provider: Provider, body: &[u8]) -> Result<Self, LlmError> {
        let response = match provider {
            Provider::Anthropic => Self::Anthropic(serde_json::from_slice(body)?),
            Provider::Cohere => Self::Cohere(serde_json::from_slice(body)?),
            Provider::Ai21 => Self::Ai21(serde_json::from_slice(body)?),
            Provider::Amazon => Self::Amazon(serde_json::from_slice(body)?),
        };
        Ok(response)
    }

    /// Generated text of the first candidate, wherever the provider puts it
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Anthropic(completion) => Some(&completion.completion),
            Self::Cohere(response) => response.generations.first().map(|g| g.text.as_str()),
            Self::Ai21(response) => response.completions.first().map(|c| c.data.text.as_str()),
            Self::Amazon(response) => response.results.first().map(|r| r.output_text.as_str()),
        }
    }

    /// Stop cause of the first candidate, where the provider reports one
    pub fn stop_reason(&self) -> Option<&str> {
        match self {
            Self::Anthropic(completion) => completion.stop_reason.as_deref(),
            Self::Cohere(response) => response
                .generations
                .first()
                .and_then(|g| g.finish_reason.as_deref()),
            Self::Ai21(response) => response
                .completions
                .first()
                .and_then(|c| c.finish_reason.as_ref())
                .and_then(|f| f.reason.as_deref()),
            Self::Amazon(response) => response
                .results
                .first()
                .and_then(|r| r.completion_reason.as_deref()),
        }
    }
}

/// Decode a raw messages-interface body into the completed message type
pub fn parse_chat(body: &[u8]) -> Result<ChatResponse, LlmError> {
    Ok(serde_json::from_slice(body)?)
}
