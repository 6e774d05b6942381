//! Azure OpenAI handler
//!
//! Serves every operation the gateway dispatches. The upstream calls are
//! stubbed: each operation returns a fixed result with empty usage so the
//! dispatch path can be exercised end to end without credentials.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::traits::LLMHandler;
use crate::core::types::{HandlerError, HandlerOutput, ModelRequest, Operation};

fn default_api_version() -> String {
    "2024-02-01".to_string()
}

/// Azure OpenAI connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureOpenAIConfig {
    /// API key for the Azure OpenAI resource
    pub api_key: Option<String>,
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub api_base: Option<String>,
    /// Deployment name to route requests to
    pub deployment: Option<String>,
    /// API version query parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for AzureOpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            deployment: None,
            api_version: default_api_version(),
        }
    }
}

impl AzureOpenAIConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = Some(deployment.into());
        self
    }
}

/// Handler backed by an Azure OpenAI deployment
#[derive(Debug, Default)]
pub struct AzureOpenAIHandler {
    config: AzureOpenAIConfig,
}

impl AzureOpenAIHandler {
    pub const NAME: &'static str = "azure";

    pub fn new(config: AzureOpenAIConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AzureOpenAIConfig {
        &self.config
    }
}

#[async_trait]
impl LLMHandler for AzureOpenAIHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn operations(&self) -> &'static [Operation] {
        &Operation::ALL
    }

    async fn chat_completion(
        &self,
        _request: &ModelRequest,
    ) -> Result<HandlerOutput, HandlerError> {
        // TODO: call the Azure chat completions deployment once the
        // upstream client lands.
        Ok(HandlerOutput::new(json!("chat completion (stub)")))
    }

    async fn completion(&self, _request: &ModelRequest) -> Result<HandlerOutput, HandlerError> {
        Ok(HandlerOutput::new(json!("completion (stub)")))
    }

    async fn embeddings(&self, _request: &ModelRequest) -> Result<HandlerOutput, HandlerError> {
        Ok(HandlerOutput::new(json!("embeddings (stub)")))
    }
}
