//! Amazon Titan text wire format types
//!
//! Titan nests every sampling option under `textGenerationConfig` instead of
//! placing it at the top level.

use serde::{Deserialize, Serialize};

/// Text generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRequest {
    /// Prompt text, passed through unwrapped
    pub input_text: String,
    /// Sampling options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_generation_config: Option<TextGenerationConfig>,
}

/// Nested sampling options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig {
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_token_count: Option<u32>,
    /// Sequences that end generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl TextGenerationConfig {
    /// Whether no option is set; an empty config is omitted from the wire
    pub const fn is_empty(&self) -> bool {
        self.max_token_count.is_none()
            && self.stop_sequences.is_none()
            && self.temperature.is_none()
            && self.top_p.is_none()
    }
}

/// Text generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResponse {
    /// Tokens consumed by the prompt
    #[serde(default)]
    pub input_text_token_count: Option<u32>,
    /// Generated candidates
    pub results: Vec<TextResult>,
}

/// One generated candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResult {
    /// Tokens generated for this candidate
    #[serde(default)]
    pub token_count: Option<u32>,
    /// Generated text
    pub output_text: String,
    /// Why generation stopped
    #[serde(default)]
    pub completion_reason: Option<String>,
}
