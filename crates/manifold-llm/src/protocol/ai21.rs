//! AI21 Jurassic wire format types
//!
//! The only provider with camelCased fields and nested penalty objects.

use serde::{Deserialize, Serialize};

/// Complete request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    /// Prompt text, passed through unwrapped
    pub prompt: String,
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Sequences that end generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    /// Penalty on repeated tokens, scaled by occurrence count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_penalty: Option<Penalty>,
    /// Penalty on tokens already present in the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<Penalty>,
    /// Penalty on tokens by generation frequency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<Penalty>,
}

/// Penalty sub-object; always sent whole
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    /// Penalty strength
    pub scale: f64,
    /// Apply to whitespace tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_whitespaces: Option<bool>,
    /// Apply to punctuation tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_punctuations: Option<bool>,
    /// Apply to number tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_numbers: Option<bool>,
    /// Apply to stopword tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_stopwords: Option<bool>,
    /// Apply to emoji tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_emojis: Option<bool>,
}

/// Complete response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteResponse {
    /// Request identifier
    #[serde(default)]
    pub id: Option<u64>,
    /// Generated candidates
    pub completions: Vec<Completion>,
}

/// One generated candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    /// Candidate payload
    pub data: CompletionData,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// Generated text within a candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionData {
    /// The text string
    pub text: String,
}

/// Stop cause reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishReason {
    /// Cause name (e.g. "endoftext", "length")
    #[serde(default)]
    pub reason: Option<String>,
}
