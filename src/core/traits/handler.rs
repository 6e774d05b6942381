//! Handler capability contract
//!
//! Defines the unified interface every backend provider implements.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::types::{HandlerError, HandlerOutput, ModelRequest, Operation};

/// Unified backend provider interface
///
/// This is the extension point of the gateway: one implementation per
/// upstream backend, registered in the `HandlerRegistry` under one or
/// more provider keys.
///
/// # Design Principles
///
/// 1. **Request uniformity**: every operation accepts the same envelope
/// 2. **Capability driven**: optional operations declare themselves
///    through `operations()` and default to an unimplemented error
/// 3. **Shared freely**: the registry hands out `Arc<dyn LLMHandler>`
///    clones to concurrent requests, so mutable state belongs behind
///    interior synchronization
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use modelgate::core::traits::LLMHandler;
/// use modelgate::core::types::{HandlerError, HandlerOutput, ModelRequest, Operation};
/// use serde_json::json;
///
/// #[derive(Debug)]
/// struct EchoHandler;
///
/// #[async_trait]
/// impl LLMHandler for EchoHandler {
///     fn name(&self) -> &'static str {
///         "echo"
///     }
///
///     fn operations(&self) -> &'static [Operation] {
///         &[Operation::ChatCompletion]
///     }
///
///     async fn chat_completion(
///         &self,
///         request: &ModelRequest,
///     ) -> Result<HandlerOutput, HandlerError> {
///         Ok(HandlerOutput::new(json!(request.input())))
///     }
/// }
/// ```
#[async_trait]
pub trait LLMHandler: Send + Sync + Debug + 'static {
    /// Registration identity of the handler
    ///
    /// Used for routing and logging; must be unique across the system.
    fn name(&self) -> &'static str;

    /// Operations this handler declares support for
    ///
    /// Diagnostic surface only: the dispatch path calls the operation
    /// methods directly, so a declared operation with no override still
    /// reports unimplemented.
    fn operations(&self) -> &'static [Operation];

    /// Whether an operation is declared by this handler
    fn supports(&self, operation: Operation) -> bool {
        self.operations().contains(&operation)
    }

    /// Execute a chat completion
    ///
    /// Mandatory for every handler.
    async fn chat_completion(&self, request: &ModelRequest) -> Result<HandlerOutput, HandlerError>;

    /// Execute a text completion
    ///
    /// # Default Implementation
    /// Reports the operation as unimplemented.
    async fn completion(&self, _request: &ModelRequest) -> Result<HandlerOutput, HandlerError> {
        Err(HandlerError::unimplemented(
            self.name(),
            Operation::Completion,
        ))
    }

    /// Generate embeddings for the input
    ///
    /// # Default Implementation
    /// Reports the operation as unimplemented.
    async fn embeddings(&self, _request: &ModelRequest) -> Result<HandlerOutput, HandlerError> {
        Err(HandlerError::unimplemented(
            self.name(),
            Operation::Embeddings,
        ))
    }

    /// Route an operation to the matching method
    async fn invoke(
        &self,
        operation: Operation,
        request: &ModelRequest,
    ) -> Result<HandlerOutput, HandlerError> {
        match operation {
            Operation::ChatCompletion => self.chat_completion(request).await,
            Operation::Completion => self.completion(request).await,
            Operation::Embeddings => self.embeddings(request).await,
        }
    }
}
