//! # modelgate
//!
//! A request-dispatch gateway for LLM backends. One request envelope goes
//! in, the registry picks a handler, and one response envelope comes out,
//! whichever provider sits behind it.
//!
//! ## Features
//!
//! - **Uniform Envelope**: Every operation shares the same request and response shape
//! - **Pluggable Handlers**: Backends implement one trait and register under a key
//! - **Explicit Errors**: Validation, resolution, and handler failures map to distinct statuses
//! - **Lock-Free Reads**: Handler resolution never takes a lock on the hot path
//! - **HTTP Gateway**: Actix-web server exposing the dispatch pipeline
//!
//! ## Quick Start - Library
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use modelgate::{
//!     Dispatcher, HandlerError, HandlerOutput, HandlerRegistry, LLMHandler, ModelRequest,
//!     Operation,
//! };
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct EchoHandler;
//!
//! #[async_trait]
//! impl LLMHandler for EchoHandler {
//!     fn name(&self) -> &'static str {
//!         "echo"
//!     }
//!
//!     fn operations(&self) -> &'static [Operation] {
//!         &[Operation::ChatCompletion]
//!     }
//!
//!     async fn chat_completion(
//!         &self,
//!         request: &ModelRequest,
//!     ) -> Result<HandlerOutput, HandlerError> {
//!         Ok(HandlerOutput::new(json!(request.input())))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = HandlerRegistry::builder()
//!         .with_handler("echo", Arc::new(EchoHandler))
//!         .build()?;
//!     let dispatcher = Dispatcher::new(Arc::new(registry));
//!
//!     let response = dispatcher
//!         .dispatch(json!({"input": "hello"}), Operation::ChatCompletion)
//!         .await?;
//!     println!("{}", response.result());
//!     Ok(())
//! }
//! ```
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use modelgate::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

// Export the dispatch pipeline
pub use core::dispatch::Dispatcher;
pub use core::handlers::{HandlerRegistry, HandlerRegistryBuilder};
pub use core::traits::LLMHandler;

// Export the envelope types and error taxonomy
pub use core::types::{
    DispatchError, HandlerError, HandlerOutput, ModelRequest, ModelResponse, Operation,
    RegistryError, UnknownProviderError, ValidationError,
};

use tracing::info;

/// A minimal gateway instance wrapping the HTTP server
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting modelgate");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information captured at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
