//! Client configuration

use secrecy::SecretString;
use serde::Deserialize;

use crate::types::InferenceParams;

/// Configuration for one client instance
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Bedrock model id the client targets (e.g. `anthropic.claude-v2`)
    pub model: String,
    /// Instance-level canonical defaults merged under every call's overrides
    #[serde(default)]
    pub defaults: InferenceParams,
    /// AWS connection settings
    #[serde(default)]
    pub aws: AwsConfig,
}

impl ClientConfig {
    /// Configuration targeting a model with no defaults and default AWS
    /// connection settings
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            defaults: InferenceParams::default(),
            aws: AwsConfig::default(),
        }
    }
}

/// AWS Bedrock connection settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsConfig {
    /// AWS region; the SDK default chain applies when absent
    #[serde(default)]
    pub region: Option<String>,
    /// Access key ID (optional, uses the default credential chain if absent)
    #[serde(default)]
    pub access_key_id: Option<SecretString>,
    /// Secret access key
    #[serde(default)]
    pub secret_access_key: Option<SecretString>,
}
