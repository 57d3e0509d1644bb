//! Conversion from canonical parameters to the Cohere wire format

use crate::protocol::cohere::GenerateRequest;
use crate::types::InferenceParams;

/// Build a generate request from canonical parameters
///
/// `max_tokens_to_sample` becomes `max_tokens`; top-p and top-k travel as
/// `p` and `k`. The prompt is passed through unwrapped.
pub fn generate_request(prompt: &str, params: &InferenceParams) -> GenerateRequest {
    GenerateRequest {
        prompt: prompt.to_owned(),
        max_tokens: params.max_tokens_to_sample,
        temperature: params.temperature,
        p: params.top_p,
        k: params.top_k,
        stop_sequences: params.stop_sequences.clone(),
    }
}
