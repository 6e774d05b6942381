//! Configuration management for the gateway
//!
//! Handles loading, validation, and merging of gateway configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider configurations
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
    /// Provider key requests without an explicit key resolve to
    pub default_provider: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: vec![ProviderConfig::new("azure", "azure-openai")],
            default_provider: None,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Config::default().with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// `MODELGATE_HOST`, `MODELGATE_PORT`, and `MODELGATE_DEFAULT_PROVIDER`
    /// take precedence over file values.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(host) = std::env::var("MODELGATE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("MODELGATE_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid MODELGATE_PORT: {}", e)))?;
        }
        if let Ok(default_provider) = std::env::var("MODELGATE_DEFAULT_PROVIDER") {
            self.default_provider = Some(default_provider);
        }
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get providers configuration
    pub fn providers(&self) -> &[ProviderConfig] {
        &self.providers
    }

    /// Get the configured default provider key
    pub fn default_provider(&self) -> Option<&str> {
        self.default_provider.as_deref()
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        if self.providers.is_empty() {
            return Err(GatewayError::Config(
                "At least one provider must be configured".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for provider in &self.providers {
            provider
                .validate()
                .map_err(|e| GatewayError::Config(format!("Provider config error: {}", e)))?;

            if !names.insert(provider.name.as_str()) {
                return Err(GatewayError::Config(format!(
                    "Duplicate provider name: {}",
                    provider.name
                )));
            }
        }

        if let Some(default_provider) = &self.default_provider {
            if !names.contains(default_provider.as_str()) {
                return Err(GatewayError::Config(format!(
                    "Default provider '{}' is not configured",
                    default_provider
                )));
            }
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);

        for provider in other.providers {
            if let Some(index) = self
                .providers
                .iter()
                .position(|existing| existing.name == provider.name)
            {
                self.providers[index] = provider;
            } else {
                self.providers.push(provider);
            }
        }

        if other.default_provider.is_some() {
            self.default_provider = other.default_provider;
        }

        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
