//! OpenAI handler
//!
//! Declares chat completion and completion support. Embeddings falls
//! through to the trait default, so dispatching it reports not
//! implemented instead of silently misbehaving.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::traits::LLMHandler;
use crate::core::types::{HandlerError, HandlerOutput, ModelRequest, Operation};

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

/// OpenAI connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// API key for the OpenAI account
    pub api_key: Option<String>,
    /// Base URL, overridable for compatible endpoints
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
        }
    }
}

impl OpenAIConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// Handler backed by the OpenAI API
#[derive(Debug, Default)]
pub struct OpenAIHandler {
    config: OpenAIConfig,
}

impl OpenAIHandler {
    pub const NAME: &'static str = "openai";

    pub fn new(config: OpenAIConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }
}

#[async_trait]
impl LLMHandler for OpenAIHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::ChatCompletion, Operation::Completion]
    }

    async fn chat_completion(
        &self,
        _request: &ModelRequest,
    ) -> Result<HandlerOutput, HandlerError> {
        Ok(HandlerOutput::new(json!("chat completion (stub)")))
    }

    async fn completion(&self, _request: &ModelRequest) -> Result<HandlerOutput, HandlerError> {
        Ok(HandlerOutput::new(json!("completion (stub)")))
    }
}
