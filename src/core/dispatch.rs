//! Request dispatch
//!
//! Single entry point joining the pieces: validate the raw envelope,
//! resolve a handler, invoke the requested operation, and wrap the
//! output. Each request is processed once; failed invocations surface
//! the handler's error without retrying.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::core::handlers::HandlerRegistry;
use crate::core::types::{DispatchError, ModelRequest, ModelResponse, Operation};

/// Orchestrates validation, handler resolution, and invocation
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<HandlerRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    /// Registry backing this dispatcher
    pub fn registry(&self) -> &Arc<HandlerRegistry> {
        &self.registry
    }

    /// Dispatch a raw request envelope
    ///
    /// Validation happens before any handler is resolved, so a malformed
    /// envelope never reaches a backend.
    pub async fn dispatch(
        &self,
        payload: Value,
        operation: Operation,
    ) -> Result<ModelResponse, DispatchError> {
        let request = match ModelRequest::from_value(payload) {
            Ok(request) => request,
            Err(error) => {
                warn!(%operation, %error, "rejected malformed request envelope");
                return Err(error.into());
            }
        };
        self.dispatch_request(&request, operation).await
    }

    /// Dispatch an already validated request
    pub async fn dispatch_request(
        &self,
        request: &ModelRequest,
        operation: Operation,
    ) -> Result<ModelResponse, DispatchError> {
        let request_id = Uuid::new_v4();

        let handler = match self.registry.resolve(request) {
            Ok(handler) => handler,
            Err(error) => {
                warn!(%request_id, %operation, %error, "provider resolution failed");
                return Err(error.into());
            }
        };

        info!(
            %request_id,
            %operation,
            provider = handler.name(),
            "dispatching request"
        );

        match handler.invoke(operation, request).await {
            Ok(output) => {
                debug!(%request_id, provider = handler.name(), "handler completed");
                Ok(ModelResponse::from(output))
            }
            Err(handler_error) => {
                if handler_error.is_retryable() {
                    error!(
                        %request_id,
                        provider = handler.name(),
                        %handler_error,
                        "upstream provider failure"
                    );
                } else {
                    warn!(
                        %request_id,
                        provider = handler.name(),
                        %handler_error,
                        "handler rejected request"
                    );
                }
                Err(handler_error.into())
            }
        }
    }
}
