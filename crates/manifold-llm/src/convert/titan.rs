//! Conversion from canonical parameters to the Amazon Titan wire format

use crate::protocol::titan::{TextGenerationConfig, TextRequest};
use crate::types::InferenceParams;

/// Build a text request from canonical parameters
///
/// Titan nests every sampling option under `textGenerationConfig`; the
/// whole config object is omitted when nothing is set. The prompt travels
/// as `inputText`, unwrapped.
pub fn text_request(prompt: &str, params: &InferenceParams) -> TextRequest {
    let config = TextGenerationConfig {
        max_token_count: params.max_tokens_to_sample,
        stop_sequences: params.stop_sequences.clone(),
        temperature: params.temperature,
        top_p: params.top_p,
    };

    TextRequest {
        input_text: prompt.to_owned(),
        text_generation_config: if config.is_empty() { None } else { Some(config) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_options_nest_under_config() {
        let params = InferenceParams {
            max_tokens_to_sample: Some(512),
            temperature: Some(0.3),
            stop_sequences: Some(vec!["User:".to_owned()]),
            ..Default::default()
        };

        let value = serde_json::to_value(text_request("Summarize this", &params)).unwrap();
        assert_eq!(value["inputText"], "Summarize this");
        let config = &value["textGenerationConfig"];
        assert_eq!(config["maxTokenCount"], 512);
        assert_eq!(config["temperature"], 0.3);
        assert_eq!(config["stopSequences"][0], "User:");
        assert!(value.get("maxTokenCount").is_none());
    }

    #[test]
    fn empty_config_is_omitted() {
        let value = serde_json::to_value(text_request("Hi", &InferenceParams::default())).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("inputText"));
    }
}
