//! Backend handler implementations
//!
//! Contains the registry, the concrete handlers, and the factory that
//! turns configuration entries into registered handler instances.

pub mod azure_openai;
pub mod openai;
pub mod registry;

use std::sync::Arc;

use crate::config::models::ProviderConfig;
use crate::core::traits::LLMHandler;
use crate::utils::error::{GatewayError, Result};

pub use azure_openai::{AzureOpenAIConfig, AzureOpenAIHandler};
pub use openai::{OpenAIConfig, OpenAIHandler};
pub use registry::{HandlerRegistry, HandlerRegistryBuilder};

/// Handler kind enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    AzureOpenAI,
    OpenAI,
    Unknown(String),
}

impl From<&str> for HandlerKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "azure" | "azure-openai" | "azure_openai" => HandlerKind::AzureOpenAI,
            "openai" => HandlerKind::OpenAI,
            _ => HandlerKind::Unknown(s.to_string()),
        }
    }
}

impl std::fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerKind::AzureOpenAI => write!(f, "azure"),
            HandlerKind::OpenAI => write!(f, "openai"),
            HandlerKind::Unknown(kind) => write!(f, "{}", kind),
        }
    }
}

/// Build a handler from a configuration entry
///
/// Entry-level `api_key` and `api_base` take precedence over the same
/// keys inside `settings`.
pub fn from_config(config: &ProviderConfig) -> Result<Arc<dyn LLMHandler>> {
    let kind = HandlerKind::from(config.kind.as_str());
    let invalid_settings = |e: serde_json::Error| {
        GatewayError::Config(format!(
            "invalid settings for provider '{}': {}",
            config.name, e
        ))
    };

    match kind {
        HandlerKind::AzureOpenAI => {
            let mut handler_config: AzureOpenAIConfig =
                serde_json::from_value(config.settings_value()).map_err(invalid_settings)?;
            if let Some(api_key) = &config.api_key {
                handler_config.api_key = Some(api_key.clone());
            }
            if let Some(api_base) = &config.api_base {
                handler_config.api_base = Some(api_base.clone());
            }
            Ok(Arc::new(AzureOpenAIHandler::new(handler_config)))
        }
        HandlerKind::OpenAI => {
            let mut handler_config: OpenAIConfig =
                serde_json::from_value(config.settings_value()).map_err(invalid_settings)?;
            if let Some(api_key) = &config.api_key {
                handler_config.api_key = Some(api_key.clone());
            }
            if let Some(api_base) = &config.api_base {
                handler_config.api_base = api_base.clone();
            }
            Ok(Arc::new(OpenAIHandler::new(handler_config)))
        }
        HandlerKind::Unknown(kind) => Err(GatewayError::Config(format!(
            "unknown handler kind '{}' for provider '{}'",
            kind, config.name
        ))),
    }
}
