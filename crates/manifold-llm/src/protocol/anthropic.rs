//! Anthropic wire format types (text completions and messages API)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages protocol version Bedrock expects when none is supplied
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

// -- Text completions --

/// Legacy text-completions request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Prompt, wrapped in the human/assistant turn-delimiter template
    pub prompt: String,
    /// Maximum tokens to generate (required by the backend)
    pub max_tokens_to_sample: u32,
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
}

/// Legacy text-completions response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Generated text
    pub completion: String,
    /// Why generation stopped
    #[serde(default)]
    pub stop_reason: Option<String>,
    /// Stop sequence that ended generation, if any
    #[serde(default)]
    pub stop: Option<String>,
}

// -- Messages API --

/// Messages API request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesRequest {
    /// Protocol version marker
    pub anthropic_version: String,
    /// Maximum tokens to generate (required by the backend)
    pub max_tokens: u32,
    /// Conversation turns
    pub messages: Vec<Message>,
    /// System prompt (top-level, not a message)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Sequences that end generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Top-k sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

/// One conversation turn on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// "user" or "assistant"
    pub role: String,
    /// Turn text
    pub content: String,
}

/// A completed message, as returned whole or assembled from a stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message identifier
    pub id: String,
    /// Object type (always "message")
    #[serde(rename = "type")]
    pub message_type: String,
    /// Role (always "assistant")
    pub role: String,
    /// Model that produced the message
    pub model: String,
    /// Content blocks in order
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Why generation stopped
    #[serde(default)]
    pub stop_reason: Option<String>,
    /// Stop sequence that ended generation, if any
    #[serde(default)]
    pub stop_sequence: Option<String>,
    /// Token usage counters
    #[serde(default)]
    pub usage: Usage,
}

impl MessageResponse {
    /// Concatenated text of all text blocks
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::ToolUse { .. } => None,
            })
            .collect()
    }
}

/// One unit of a message body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text
    Text {
        /// The text string
        text: String,
    },
    /// Structured tool invocation request
    ToolUse {
        /// Tool use identifier
        id: String,
        /// Tool name
        name: String,
        /// Tool input document
        input: Value,
    },
}

/// Token usage counters
///
/// Kept as an open map rather than fixed fields: the backend adds counters
/// over time, and `message_delta` events patch them key-by-key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usage(pub serde_json::Map<String, Value>);

impl Usage {
    /// Tokens consumed by the prompt
    pub fn input_tokens(&self) -> Option<u64> {
        self.0.get("input_tokens").and_then(Value::as_u64)
    }

    /// Tokens generated in the response
    pub fn output_tokens(&self) -> Option<u64> {
        self.0.get("output_tokens").and_then(Value::as_u64)
    }

    /// Fold a later event's counters into these
    ///
    /// Numeric counters add; anything else replaces. Counters absent from
    /// the patch keep their accumulated value.
    pub fn merge(&mut self, patch: &Self) {
        for (key, value) in &patch.0 {
            match (self.0.get(key).and_then(Value::as_u64), value.as_u64()) {
                (Some(current), Some(incoming)) => {
                    self.0.insert(key.clone(), Value::from(current + incoming));
                }
                _ => {
                    self.0.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

// -- Streaming --

/// Event kinds in a streamed messages response
///
/// Kinds this client does not know deserialize to `Unknown` and are skipped,
/// so new backend event types never abort reassembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Stream opened; carries the message shell with empty content
    MessageStart {
        /// Partial message establishing top-level fields
        message: MessageResponse,
    },
    /// A content block begins at the given index
    ContentBlockStart {
        /// Zero-based block index
        index: usize,
        /// Initial block descriptor
        content_block: ContentBlockStart,
    },
    /// Incremental content for the block at the given index
    ContentBlockDelta {
        /// Zero-based block index
        index: usize,
        /// Delta payload
        delta: ContentBlockDelta,
    },
    /// The block at the given index is complete
    ContentBlockStop {
        /// Zero-based block index
        index: usize,
    },
    /// Top-level message metadata update
    MessageDelta {
        /// Stop reason / stop sequence patch
        delta: MessageDelta,
        /// Usage counter patch
        #[serde(default)]
        usage: Option<Usage>,
    },
    /// Stream completed
    MessageStop,
    /// Keep-alive
    Ping,
    /// Event kind this client does not know
    #[serde(other)]
    Unknown,
}

/// Block descriptor in a `content_block_start` event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlockStart {
    /// Text block
    Text {
        /// Initial text (usually empty)
        #[serde(default)]
        text: String,
    },
    /// Tool use block; input arrives later as JSON fragments
    ToolUse {
        /// Tool use identifier
        id: String,
        /// Tool name
        name: String,
    },
}

/// Delta payload in a `content_block_delta` event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlockDelta {
    /// Text fragment to append
    TextDelta {
        /// The fragment
        text: String,
    },
    /// Fragment of the block's input JSON document
    InputJsonDelta {
        /// The fragment; fragments concatenate in arrival order
        partial_json: String,
    },
    /// Delta kind this client does not know
    #[serde(other)]
    Unknown,
}

/// Top-level patch in a `message_delta` event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageDelta {
    /// Why generation stopped
    #[serde(default)]
    pub stop_reason: Option<String>,
    /// Stop sequence that ended generation
    #[serde(default)]
    pub stop_sequence: Option<String>,
}
