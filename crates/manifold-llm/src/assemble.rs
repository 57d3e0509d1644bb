//! Reassembly of a streamed messages response
//!
//! The backend delivers a message as an ordered sequence of small events.
//! [`MessageAssembler`] is a left-fold over that sequence: each event is
//! applied exactly once, in arrival order, onto an owned accumulator, and
//! [`MessageAssembler::finish`] freezes the result into one
//! [`MessageResponse`]. The fold holds no lock and touches no I/O, so it is
//! testable without a live stream.

use serde_json::Value;

use crate::error::LlmError;
use crate::protocol::anthropic::{
    ContentBlock, ContentBlockDelta, ContentBlockStart, MessageResponse, StreamEvent,
};

/// Accumulator folding stream events into one completed message
#[derive(Debug, Default)]
pub struct MessageAssembler {
    /// Top-level message fields, established by `message_start`
    message: Option<MessageResponse>,
    /// Per-index block state; indices match the wire's content block indices
    blocks: Vec<BlockState>,
}

/// Accumulated state of one content block
#[derive(Debug)]
enum BlockState {
    /// Text block; deltas append to `text` in arrival order
    Text { text: String },
    /// Tool use block; `partial_json` concatenates input fragments and is
    /// parsed once at finalization
    ToolUse {
        id: String,
        name: String,
        partial_json: String,
    },
}

impl MessageAssembler {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the accumulator
    ///
    /// Events must arrive in wire order. Content events before
    /// `message_start`, and deltas addressing a block index never introduced
    /// by `content_block_start`, fail fast with
    /// [`LlmError::MalformedStream`]. Unknown event kinds are skipped.
    pub fn apply(&mut self, event: &StreamEvent) -> Result<(), LlmError> {
        match event {
            StreamEvent::MessageStart { message } => {
                self.blocks = message.content.iter().map(BlockState::from_block).collect();
                let mut message = message.clone();
                message.content.clear();
                self.message = Some(message);
            }

            StreamEvent::ContentBlockStart { index, content_block } => {
                self.require_started("content_block_start")?;
                let state = BlockState::from_start(content_block);
                if *index < self.blocks.len() {
                    self.blocks[*index] = state;
                } else {
                    // A gap in the indices is padded so positions stay
                    // aligned with the wire's block numbering.
                    while self.blocks.len() < *index {
                        self.blocks.push(BlockState::Text { text: String::new() });
                    }
                    self.blocks.push(state);
                }
            }

            StreamEvent::ContentBlockDelta { index, delta } => {
                self.require_started("content_block_delta")?;
                let block = self.blocks.get_mut(*index).ok_or_else(|| {
                    LlmError::MalformedStream(format!(
                        "delta for block {index} arrived before its content_block_start"
                    ))
                })?;
                match (block, delta) {
                    (BlockState::Text { text }, ContentBlockDelta::TextDelta { text: fragment }) => {
                        text.push_str(fragment);
                    }
                    (
                        BlockState::ToolUse { partial_json, .. },
                        ContentBlockDelta::InputJsonDelta { partial_json: fragment },
                    ) => {
                        partial_json.push_str(fragment);
                    }
                    // Delta kinds that do not match the block's shape (or
                    // that this client does not know) carry nothing to fold.
                    _ => {}
                }
            }

            StreamEvent::MessageDelta { delta, usage } => {
                let Some(message) = self.message.as_mut() else {
                    return Err(LlmError::MalformedStream(
                        "message_delta arrived before message_start".to_owned(),
                    ));
                };
                if let Some(stop_reason) = &delta.stop_reason {
                    message.stop_reason = Some(stop_reason.clone());
                }
                if let Some(stop_sequence) = &delta.stop_sequence {
                    message.stop_sequence = Some(stop_sequence.clone());
                }
                if let Some(patch) = usage {
                    message.usage.merge(patch);
                }
            }

            // Content-free or unknown kinds; skipping them keeps reassembly
            // working when the backend grows new event types.
            StreamEvent::ContentBlockStop { .. }
            | StreamEvent::MessageStop
            | StreamEvent::Ping
            | StreamEvent::Unknown => {}
        }
        Ok(())
    }

    /// Freeze the accumulator into the completed message
    ///
    /// Each tool block's concatenated input fragments must parse as one JSON
    /// document; an empty concatenation yields `{}`.
    pub fn finish(self) -> Result<MessageResponse, LlmError> {
        let mut message = self
            .message
            .ok_or_else(|| LlmError::MalformedStream("stream ended before message_start".to_owned()))?;

        message.content = self
            .blocks
            .into_iter()
            .enumerate()
            .map(|(index, block)| block.into_block(index))
            .collect::<Result<_, _>>()?;

        Ok(message)
    }

    fn require_started(&self, kind: &str) -> Result<(), LlmError> {
        if self.message.is_none() {
            return Err(LlmError::MalformedStream(format!(
                "{kind} arrived before message_start"
            )));
        }
        Ok(())
    }
}

impl BlockState {
    fn from_start(start: &ContentBlockStart) -> Self {
        match start {
            ContentBlockStart::Text { text } => Self::Text { text: text.clone() },
            ContentBlockStart::ToolUse { id, name } => Self::ToolUse {
                id: id.clone(),
                name: name.clone(),
                partial_json: String::new(),
            },
        }
    }

    fn from_block(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Text { text } => Self::Text { text: text.clone() },
            ContentBlock::ToolUse { id, name, input } => Self::ToolUse {
                id: id.clone(),
                name: name.clone(),
                partial_json: input.to_string(),
            },
        }
    }

    fn into_block(self, index: usize) -> Result<ContentBlock, LlmError> {
        match self {
            Self::Text { text } => Ok(ContentBlock::Text { text }),
            Self::ToolUse { id, name, partial_json } => {
                let input = if partial_json.trim().is_empty() {
                    Value::Object(serde_json::Map::new())
                } else {
                    serde_json::from_str(&partial_json).map_err(|e| {
                        LlmError::MalformedStream(format!(
                            "tool input for block {index} is not valid JSON: {e}"
                        ))
                    })?
                };
                Ok(ContentBlock::ToolUse { id, name, input })
            }
        }
    }
}
