//! Unified client for Amazon Bedrock text-generation providers
//!
//! One canonical request shape (prompt or messages plus sampling parameters)
//! dispatched to Anthropic, Cohere, AI21, or Amazon Titan models through
//! the Bedrock invocation endpoint, with one uniform response shape back.
//! Streamed responses are reassembled into the same completed message a
//! single-shot call returns.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod assemble;
pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod response;
pub mod runtime;
pub mod types;

pub use assemble::MessageAssembler;
pub use client::Client;
pub use config::{AwsConfig, ClientConfig};
pub use error::LlmError;
pub use protocol::anthropic::StreamEvent;
pub use provider::{Operation, Provider};
pub use response::{ChatResponse, CompletionResponse};
pub use runtime::{BedrockRuntime, ChunkStream, ModelRuntime};
pub use types::{ChatMessage, ChatParams, InferenceParams, Penalty, Role};
