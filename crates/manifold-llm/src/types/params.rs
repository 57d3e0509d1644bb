use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// Penalty applied to one category of generated tokens
///
/// Only AI21 accepts these; they travel as whole sub-objects and are never
/// merged field-by-field with defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

/// Canonical sampling/control options for single-shot completion
///
/// Field names follow the Anthropic text-completions vocabulary; the convert
/// layer renames them per provider. Instance-level defaults (configured at
/// client construction) are merged under call-time overrides, overrides
/// winning field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceParams {
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens_to_sample: Option<u32>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Top-k sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
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

impl InferenceParams {
    /// Merge call-time overrides over these values
    ///
    /// Shallow merge: each set override field replaces the default whole,
    /// including the penalty sub-objects.
    pub fn merged_with(&self, overrides: &Self) -> Self {
        Self {
            max_tokens_to_sample: overrides.max_tokens_to_sample.or(self.max_tokens_to_sample),
            temperature: overrides.temperature.or(self.temperature),
            top_p: overrides.top_p.or(self.top_p),
            top_k: overrides.top_k.or(self.top_k),
            stop_sequences: overrides
                .stop_sequences
                .clone()
                .or_else(|| self.stop_sequences.clone()),
            count_penalty: overrides
                .count_penalty
                .clone()
                .or_else(|| self.count_penalty.clone()),
            presence_penalty: overrides
                .presence_penalty
                .clone()
                .or_else(|| self.presence_penalty.clone()),
            frequency_penalty: overrides
                .frequency_penalty
                .clone()
                .or_else(|| self.frequency_penalty.clone()),
        }
    }
}

/// Canonical multi-turn chat request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatParams {
    /// Model id override; the client's configured model applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Conversation turns; must be non-empty
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// System prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sequences that end generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Top-k sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// Number of samples; the backend does not accept this and it is
    /// dropped at normalization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    /// End-user identifier; dropped at normalization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Messages protocol version; defaulted at normalization when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anthropic_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penalty(scale: f64) -> Penalty {
        Penalty {
            scale,
            apply_to_whitespaces: Some(true),
            apply_to_punctuations: None,
            apply_to_numbers: None,
            apply_to_stopwords: None,
            apply_to_emojis: None,
        }
    }

    #[test]
    fn overrides_win_field_by_field() {
        let defaults = InferenceParams {
            max_tokens_to_sample: Some(256),
            temperature: Some(0.5),
            ..Default::default()
        };
        let overrides = InferenceParams {
            temperature: Some(0.9),
            top_p: Some(0.7),
            ..Default::default()
        };

        let merged = defaults.merged_with(&overrides);
        assert_eq!(merged.max_tokens_to_sample, Some(256));
        assert_eq!(merged.temperature, Some(0.9));
        assert_eq!(merged.top_p, Some(0.7));
        assert_eq!(merged.top_k, None);
    }

    #[test]
    fn penalty_objects_replace_whole() {
        let defaults = InferenceParams {
            count_penalty: Some(penalty(1.0)),
            ..Default::default()
        };
        let overrides = InferenceParams {
            count_penalty: Some(Penalty {
                scale: 2.0,
                apply_to_whitespaces: None,
                apply_to_punctuations: None,
                apply_to_numbers: None,
                apply_to_stopwords: None,
                apply_to_emojis: None,
            }),
            ..Default::default()
        };

        let merged = defaults.merged_with(&overrides);
        let merged_penalty = merged.count_penalty.unwrap();
        assert_eq!(merged_penalty.scale, 2.0);
        // The default's apply_to_whitespaces flag must not leak into the
        // override's sub-object.
        assert_eq!(merged_penalty.apply_to_whitespaces, None);
    }

    #[test]
    fn merge_is_deterministic() {
        let defaults = InferenceParams {
            max_tokens_to_sample: Some(100),
            stop_sequences: Some(vec!["\n".to_owned()]),
            ..Default::default()
        };
        let overrides = InferenceParams {
            temperature: Some(0.2),
            ..Default::default()
        };

        assert_eq!(defaults.merged_with(&overrides), defaults.merged_with(&overrides));
    }
}
