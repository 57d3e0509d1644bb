//! Cohere generate wire format types

use serde::{Deserialize, Serialize};

/// Generate request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Prompt text, passed through unwrapped
    pub prompt: String,
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold (Cohere calls this `p`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    /// Top-k sampling (Cohere calls this `k`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    /// Sequences that end generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

/// Generate response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Request identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Generated candidates
    pub generations: Vec<Generation>,
}

/// One generated candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    /// Candidate identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Generated text
    pub text: String,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}
