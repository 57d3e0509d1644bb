//! Conversion from canonical parameters to the AI21 wire format

use crate::protocol::ai21::{CompleteRequest, Penalty as WirePenalty};
use crate::types::{InferenceParams, Penalty};

/// Build a complete request from canonical parameters
///
/// Fields camel-case on the wire (`maxTokens`, `topP`, `stopSequences`) and
/// penalties travel as whole camelCased sub-objects. The prompt is passed
/// through unwrapped; AI21 has no top-k option, so `top_k` is dropped.
pub fn complete_request(prompt: &str, params: &InferenceParams) -> CompleteRequest {
    CompleteRequest {
        prompt: prompt.to_owned(),
        max_tokens: params.max_tokens_to_sample,
        temperature: params.temperature,
        top_p: params.top_p,
        stop_sequences: params.stop_sequences.clone(),
        count_penalty: params.count_penalty.as_ref().map(wire_penalty),
        presence_penalty: params.presence_penalty.as_ref().map(wire_penalty),
        frequency_penalty: params.frequency_penalty.as_ref().map(wire_penalty),
    }
}

/// Copy a canonical penalty into its camelCased wire shape
fn wire_penalty(penalty: &Penalty) -> WirePenalty {
    WirePenalty {
        scale: penalty.scale,
        apply_to_whitespaces: penalty.apply_to_whitespaces,
        apply_to_punctuations: penalty.apply_to_punctuations,
        apply_to_numbers: penalty.apply_to_numbers,
        apply_to_stopwords: penalty.apply_to_stopwords,
        apply_to_emojis: penalty.apply_to_emojis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_camel_case_on_the_wire() {
        let params = InferenceParams {
            max_tokens_to_sample: Some(120),
            top_p: Some(0.8),
            stop_sequences: Some(vec!["##".to_owned()]),
            ..Default::default()
        };

        let value = serde_json::to_value(complete_request("Hi", &params)).unwrap();
        assert_eq!(value["maxTokens"], 120);
        assert_eq!(value["topP"], 0.8);
        assert_eq!(value["stopSequences"][0], "##");
        assert!(value.get("max_tokens_to_sample").is_none());
        assert!(value.get("top_p").is_none());
    }

    #[test]
    fn penalty_sub_fields_camel_case() {
        let params = InferenceParams {
            count_penalty: Some(Penalty {
                scale: 1.5,
                apply_to_whitespaces: Some(false),
                apply_to_punctuations: None,
                apply_to_numbers: Some(true),
                apply_to_stopwords: None,
                apply_to_emojis: None,
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(complete_request("Hi", &params)).unwrap();
        let penalty = &value["countPenalty"];
        assert_eq!(penalty["scale"], 1.5);
        assert_eq!(penalty["applyToWhitespaces"], false);
        assert_eq!(penalty["applyToNumbers"], true);
        assert!(penalty.get("applyToPunctuations").is_none());
        assert!(penalty.get("apply_to_whitespaces").is_none());
    }

    #[test]
    fn top_k_is_dropped() {
        let params = InferenceParams {
            top_k: Some(50),
            ..Default::default()
        };

        let value = serde_json::to_value(complete_request("Hi", &params)).unwrap();
        assert!(value.get("topK").is_none());
        assert!(value.get("k").is_none());
    }
}
