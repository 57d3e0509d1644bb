//! Provider identification and the capability table

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Backend provider reachable through the Bedrock invocation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Anthropic Claude models
    Anthropic,
    /// Cohere Command models
    Cohere,
    /// AI21 Jurassic models
    Ai21,
    /// Amazon Titan models
    Amazon,
}

/// Operation a caller can request against a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Single-shot text completion
    Completion,
    /// Multi-turn chat via the messages interface
    Chat,
    /// Text embedding
    Embedding,
}

impl Provider {
    /// Derive the provider from a Bedrock model id's namespace prefix
    /// (the text before the first `.`, e.g. `anthropic.claude-v2`)
    pub fn from_model_id(model_id: &str) -> Result<Self, LlmError> {
        let namespace = model_id.split('.').next().unwrap_or_default();
        match namespace {
            "anthropic" => Ok(Self::Anthropic),
            "cohere" => Ok(Self::Cohere),
            "ai21" => Ok(Self::Ai21),
            "amazon" => Ok(Self::Amazon),
            _ => Err(LlmError::UnknownProvider {
                model: model_id.to_owned(),
            }),
        }
    }

    /// Whether this provider supports the given operation
    ///
    /// Static capability table; every operation consults it before any
    /// payload is built or sent.
    pub const fn supports(self, operation: Operation) -> bool {
        match (self, operation) {
            (_, Operation::Completion)
            | (Self::Anthropic, Operation::Chat)
            | (Self::Cohere | Self::Amazon, Operation::Embedding) => true,
            _ => false,
        }
    }

    /// Lowercase wire name of the provider
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::Cohere => "cohere",
            Self::Ai21 => "ai21",
            Self::Amazon => "amazon",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Completion => "completion",
            Self::Chat => "chat",
            Self::Embedding => "embedding",
        };
        f.write_str(name)
    }
}

/// Whether the model only exposes the messages interface
///
/// Claude 3 and later dropped the legacy text-completions endpoint; asking
/// them for a single-shot completion is a caller error.
pub fn is_chat_only(model_id: &str) -> bool {
    model_id.starts_with("anthropic.claude-3")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_namespace_prefix() {
        assert_eq!(
            Provider::from_model_id("anthropic.claude-v2").unwrap(),
            Provider::Anthropic
        );
        assert_eq!(
            Provider::from_model_id("cohere.command-text-v14").unwrap(),
            Provider::Cohere
        );
        assert_eq!(Provider::from_model_id("ai21.j2-ultra").unwrap(), Provider::Ai21);
        assert_eq!(
            Provider::from_model_id("amazon.titan-text-express-v1").unwrap(),
            Provider::Amazon
        );
    }

    #[test]
    fn unknown_namespace_is_rejected() {
        let err = Provider::from_model_id("mistral.mixtral-8x7b").unwrap_err();
        assert!(matches!(err, LlmError::UnknownProvider { .. }));

        let err = Provider::from_model_id("").unwrap_err();
        assert!(matches!(err, LlmError::UnknownProvider { .. }));
    }

    #[test]
    fn capability_table() {
        for provider in [Provider::Anthropic, Provider::Cohere, Provider::Ai21, Provider::Amazon] {
            assert!(provider.supports(Operation::Completion));
        }

        assert!(Provider::Anthropic.supports(Operation::Chat));
        assert!(!Provider::Cohere.supports(Operation::Chat));
        assert!(!Provider::Ai21.supports(Operation::Chat));
        assert!(!Provider::Amazon.supports(Operation::Chat));

        assert!(Provider::Cohere.supports(Operation::Embedding));
        assert!(Provider::Amazon.supports(Operation::Embedding));
        assert!(!Provider::Anthropic.supports(Operation::Embedding));
        assert!(!Provider::Ai21.supports(Operation::Embedding));
    }

    #[test]
    fn chat_only_detection() {
        assert!(is_chat_only("anthropic.claude-3-sonnet-20240229-v1:0"));
        assert!(!is_chat_only("anthropic.claude-v2"));
        assert!(!is_chat_only("cohere.command-text-v14"));
    }
}
