use thiserror::Error;

use crate::provider::{Operation, Provider};

/// Errors that can occur while building, sending, or assembling a request
#[derive(Debug, Error)]
pub enum LlmError {
    /// Model id does not carry a known provider namespace
    #[error("unknown provider namespace in model id: {model}")]
    UnknownProvider { model: String },

    /// Operation requested against a provider outside its support set
    #[error("provider {provider} does not support {operation}")]
    UnsupportedProvider {
        provider: Provider,
        operation: Operation,
    },

    /// Model only exposes the messages interface but a single-shot
    /// completion was requested
    #[error("model {model} requires the messages interface")]
    UnsupportedModel { model: String },

    /// Caller supplied a malformed or incomplete request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Streamed event sequence violated the wire contract
    #[error("malformed stream: {0}")]
    MalformedStream(String),

    /// Provider response body failed to deserialize
    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Upstream invocation failed before a response was produced
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Error delivered mid-stream by the invocation endpoint
    #[error("streaming error: {0}")]
    Streaming(String),
}

impl LlmError {
    /// Whether the error was raised locally, before any network interaction
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownProvider { .. }
                | Self::UnsupportedProvider { .. }
                | Self::UnsupportedModel { .. }
                | Self::InvalidRequest(_)
        )
    }
}
