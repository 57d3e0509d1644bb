//! Conversion from canonical parameters to the Anthropic wire formats

use crate::protocol::anthropic::{ANTHROPIC_VERSION, CompletionRequest, Message, MessagesRequest};
use crate::types::{ChatParams, InferenceParams};

/// Default max tokens when neither defaults nor overrides set one
/// (the backend requires the field)
const DEFAULT_MAX_TOKENS: u32 = 256;

/// Turn delimiter opening a human turn
pub const HUMAN_TURN: &str = "\n\nHuman:";
/// Turn delimiter opening an assistant turn
pub const ASSISTANT_TURN: &str = "\n\nAssistant:";

/// Wrap a bare prompt in the fixed human/assistant turn template
///
/// The legacy completions endpoint rejects prompts without the delimiters.
fn wrap_prompt(prompt: &str) -> String {
    format!("{HUMAN_TURN} {prompt}{ASSISTANT_TURN}")
}

/// Build a text-completions request from canonical parameters
pub fn completion_request(prompt: &str, params: &InferenceParams) -> CompletionRequest {
    CompletionRequest {
        prompt: wrap_prompt(prompt),
        max_tokens_to_sample: params.max_tokens_to_sample.unwrap_or(DEFAULT_MAX_TOKENS),
        temperature: params.temperature,
        top_p: params.top_p,
        top_k: params.top_k,
        stop_sequences: params.stop_sequences.clone(),
    }
}

/// Build a messages request from canonical chat parameters
///
/// `stop` is renamed to `stop_sequences`; `max_tokens` and the protocol
/// version are defaulted when absent. Sampling count (`n`) and the end-user
/// identifier (`user`) are not accepted by the backend and are dropped.
pub fn messages_request(params: &ChatParams) -> MessagesRequest {
    MessagesRequest {
        anthropic_version: params
            .anthropic_version
            .clone()
            .unwrap_or_else(|| ANTHROPIC_VERSION.to_owned()),
        max_tokens: params.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        messages: params
            .messages
            .iter()
            .map(|msg| Message {
                role: msg.role.as_str().to_owned(),
                content: msg.content.clone(),
            })
            .collect(),
        system: params.system.clone(),
        stop_sequences: params.stop.clone(),
        temperature: params.temperature,
        top_p: params.top_p,
        top_k: params.top_k,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    #[test]
    fn prompt_is_wrapped_in_turn_template() {
        let request = completion_request("Hello there", &InferenceParams::default());
        assert_eq!(request.prompt, "\n\nHuman: Hello there\n\nAssistant:");
    }

    #[test]
    fn completion_field_names_are_unchanged() {
        let params = InferenceParams {
            max_tokens_to_sample: Some(300),
            temperature: Some(0.5),
            top_k: Some(250),
            stop_sequences: Some(vec!["\n\nHuman:".to_owned()]),
            ..Default::default()
        };

        let value = serde_json::to_value(completion_request("Hi", &params)).unwrap();
        assert_eq!(value["max_tokens_to_sample"], 300);
        assert_eq!(value["temperature"], 0.5);
        assert_eq!(value["top_k"], 250);
        assert_eq!(value["stop_sequences"][0], "\n\nHuman:");
        assert!(value.get("max_tokens").is_none());
    }

    #[test]
    fn completion_max_tokens_falls_back_to_default() {
        let request = completion_request("Hi", &InferenceParams::default());
        assert_eq!(request.max_tokens_to_sample, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn chat_defaults_and_renames() {
        let params = ChatParams {
            messages: vec![ChatMessage::user("Hi")],
            stop: Some(vec!["stop".to_owned()]),
            n: Some(3),
            user: Some("caller-1".to_owned()),
            ..Default::default()
        };

        let value = serde_json::to_value(messages_request(&params)).unwrap();
        assert_eq!(value["anthropic_version"], ANTHROPIC_VERSION);
        assert_eq!(value["max_tokens"], 256);
        assert_eq!(value["stop_sequences"][0], "stop");
        assert_eq!(value["messages"][0]["role"], "user");
        // Parameters the backend does not accept never reach the wire.
        assert!(value.get("stop").is_none());
        assert!(value.get("n").is_none());
        assert!(value.get("user").is_none());
    }

    #[test]
    fn chat_explicit_values_are_kept() {
        let params = ChatParams {
            messages: vec![ChatMessage::user("Hi"), ChatMessage::assistant("Hello")],
            system: Some("Be terse".to_owned()),
            max_tokens: Some(1024),
            anthropic_version: Some("bedrock-2024-test".to_owned()),
            temperature: Some(0.1),
            ..Default::default()
        };

        let request = messages_request(&params);
        assert_eq!(request.max_tokens, 1024);
        assert_eq!(request.anthropic_version, "bedrock-2024-test");
        assert_eq!(request.system.as_deref(), Some("Be terse"));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[1].role, "assistant");
    }
}
