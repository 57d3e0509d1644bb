//! Runtime double for driving the client without the network
//!
//! Stands in for the Bedrock invocation endpoint: returns canned payloads
//! and records every invocation so tests can assert on the exact wire bodies
//! the client produced.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use manifold_llm::{ChunkStream, LlmError, ModelRuntime};

/// One recorded invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    pub model_id: String,
    pub body: serde_json::Value,
    pub content_type: String,
    pub accept: String,
    pub streaming: bool,
}

/// A chunk the mock stream will deliver
#[derive(Debug, Clone)]
pub enum Chunk {
    /// One serialized stream event
    Event(serde_json::Value),
    /// A mid-stream failure
    Error(String),
}

/// Runtime double returning canned payloads
pub struct MockRuntime {
    response: Vec<u8>,
    chunks: Vec<Chunk>,
    invocations: Mutex<Vec<Invocation>>,
}

impl MockRuntime {
    /// Mock whose single-shot invocations answer with `body`
    pub fn with_response(body: &serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            response: serde_json::to_vec(body).unwrap(),
            chunks: Vec::new(),
            invocations: Mutex::new(Vec::new()),
        })
    }

    /// Mock whose streaming invocations deliver `chunks` in order
    pub fn with_chunks(chunks: Vec<Chunk>) -> Arc<Self> {
        Arc::new(Self {
            response: Vec::new(),
            chunks,
            invocations: Mutex::new(Vec::new()),
        })
    }

    /// All invocations recorded so far
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Body of the most recent invocation
    pub fn last_body(&self) -> serde_json::Value {
        self.invocations
            .lock()
            .unwrap()
            .last()
            .expect("no invocation recorded")
            .body
            .clone()
    }

    fn record(&self, model_id: &str, body: &[u8], content_type: &str, accept: &str, streaming: bool) {
        self.invocations.lock().unwrap().push(Invocation {
            model_id: model_id.to_owned(),
            body: serde_json::from_slice(body).expect("client sent non-JSON body"),
            content_type: content_type.to_owned(),
            accept: accept.to_owned(),
            streaming,
        });
    }
}

#[async_trait]
impl ModelRuntime for MockRuntime {
    async fn invoke(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<Vec<u8>, LlmError> {
        self.record(model_id, &body, content_type, accept, false);
        Ok(self.response.clone())
    }

    async fn invoke_stream(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<ChunkStream, LlmError> {
        self.record(model_id, &body, content_type, accept, true);

        let items: Vec<Result<Vec<u8>, LlmError>> = self
            .chunks
            .iter()
            .map(|chunk| match chunk {
                Chunk::Event(value) => Ok(serde_json::to_vec(value).unwrap()),
                Chunk::Error(message) => Err(LlmError::Streaming(message.clone())),
            })
            .collect();

        Ok(Box::pin(futures_util::stream::iter(items)))
    }
}
