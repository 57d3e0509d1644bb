//! Invocation endpoint collaborator
//!
//! The client talks to the managed invocation endpoint only through
//! [`ModelRuntime`]; [`BedrockRuntime`] is the production implementation over
//! the Bedrock SDK. Tests substitute their own runtime.

use std::pin::Pin;

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::types::ResponseStream;
use futures_util::Stream;
use secrecy::ExposeSecret;

use crate::config::AwsConfig;
use crate::error::LlmError;

/// Raw payload chunks delivered by a streaming invocation
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, LlmError>> + Send>>;

/// Narrow interface to the managed invocation endpoint
#[async_trait]
pub trait ModelRuntime: Send + Sync {
    /// Single-shot invocation; returns the raw response body
    async fn invoke(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<Vec<u8>, LlmError>;

    /// Streaming invocation; yields raw event payloads in backend order,
    /// ending with stream exhaustion or an error item
    async fn invoke_stream(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<ChunkStream, LlmError>;
}

/// Production runtime backed by the Bedrock SDK
pub struct BedrockRuntime {
    client: BedrockClient,
}

impl BedrockRuntime {
    /// Build a runtime from connection settings
    ///
    /// Explicit credentials are used when configured; otherwise the AWS
    /// default credential chain applies.
    pub async fn new(config: &AwsConfig) -> Self {
        let mut aws_config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = &config.region {
            aws_config_builder = aws_config_builder.region(aws_config::Region::new(region.clone()));
        }

        if let (Some(access_key), Some(secret_key)) = (&config.access_key_id, &config.secret_access_key) {
            let credentials = aws_credential_types::Credentials::new(
                access_key.expose_secret(),
                secret_key.expose_secret(),
                None, // session token
                None, // expiry
                "manifold-config",
            );
            aws_config_builder = aws_config_builder.credentials_provider(credentials);
        }

        let aws_config = aws_config_builder.load().await;
        Self {
            client: BedrockClient::new(&aws_config),
        }
    }

    /// Wrap an already-constructed SDK client
    pub const fn from_client(client: BedrockClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelRuntime for BedrockRuntime {
    async fn invoke(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<Vec<u8>, LlmError> {
        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .body(Blob::new(body))
            .content_type(content_type)
            .accept(accept)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = %model_id, error = %e, "bedrock invoke_model failed");
                LlmError::Upstream(e.to_string())
            })?;

        Ok(output.body().clone().into_inner())
    }

    async fn invoke_stream(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<ChunkStream, LlmError> {
        let output = self
            .client
            .invoke_model_with_response_stream()
            .model_id(model_id)
            .body(Blob::new(body))
            .content_type(content_type)
            .accept(accept)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = %model_id, error = %e, "bedrock streaming invoke failed");
                LlmError::Upstream(e.to_string())
            })?;

        let receiver = output.body;

        // Convert the SDK's EventReceiver into a futures::Stream. Chunks
        // without bytes and event variants this client does not know become
        // empty payloads, which the consumer skips.
        let stream = futures_util::stream::unfold(receiver, |mut receiver| async move {
            match receiver.recv().await {
                Ok(Some(ResponseStream::Chunk(part))) => {
                    let bytes = part
                        .bytes()
                        .map(|blob| blob.clone().into_inner())
                        .unwrap_or_default();
                    Some((Ok(bytes), receiver))
                }
                Ok(Some(_)) => Some((Ok(Vec::new()), receiver)),
                Ok(None) => None,
                Err(e) => Some((Err(LlmError::Streaming(e.to_string())), receiver)),
            }
        });

        Ok(Box::pin(stream))
    }
}
