//! Error taxonomy for the request path
//!
//! Three classes of failure sit between an incoming payload and a handler
//! response: the envelope can be malformed, the provider key can miss the
//! registry, or the handler itself can fail. Each class has its own type
//! so the HTTP layer can map them to distinct statuses.

use thiserror::Error;

use super::Operation;

/// Envelope validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The payload was not a JSON object
    #[error("request payload must be a JSON object")]
    NotAnObject,

    /// The required `input` field was absent
    #[error("missing required field 'input'")]
    MissingInput,

    /// The `input` field was present but not a string
    #[error("field 'input' must be a string")]
    InputNotAString,

    /// The `input` field was empty or whitespace only
    #[error("field 'input' must not be empty")]
    EmptyInput,

    /// The `parameters` field was present but not an object
    #[error("field 'parameters' must be an object")]
    InvalidParameters,

    /// The `provider` field was present but not a non-empty string
    #[error("field 'provider' must be a non-empty string")]
    InvalidProvider,
}

/// Resolution failed: the explicit provider key is not registered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider '{provider}'")]
pub struct UnknownProviderError {
    /// The provider key the request asked for
    pub provider: String,
}

impl UnknownProviderError {
    /// Create an error for an unregistered provider key
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }
}

/// Failures reported by a handler invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// The handler does not support the requested operation
    #[error("operation '{operation}' is not implemented by provider '{handler}'")]
    Unimplemented {
        handler: &'static str,
        operation: Operation,
    },

    /// The handler rejected the semantic content of the request
    ///
    /// Distinct from envelope validation, which never reaches a handler.
    #[error("invalid request for provider '{handler}': {message}")]
    InvalidRequest {
        handler: &'static str,
        message: String,
    },

    /// The upstream backend call failed (network, auth, quota)
    #[error("upstream failure for provider '{handler}': {message}")]
    UpstreamFailure {
        handler: &'static str,
        message: String,
    },
}

impl HandlerError {
    /// Create an unimplemented-operation error
    pub fn unimplemented(handler: &'static str, operation: Operation) -> Self {
        Self::Unimplemented { handler, operation }
    }

    /// Create an invalid-request error
    pub fn invalid_request(handler: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            handler,
            message: message.into(),
        }
    }

    /// Create an upstream-failure error
    pub fn upstream(handler: &'static str, message: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            handler,
            message: message.into(),
        }
    }

    /// Name of the handler that produced the error
    pub fn handler(&self) -> &'static str {
        match self {
            Self::Unimplemented { handler, .. }
            | Self::InvalidRequest { handler, .. }
            | Self::UpstreamFailure { handler, .. } => handler,
        }
    }

    /// Whether a retry against the same handler could succeed
    ///
    /// Only upstream failures are transient. The dispatcher never retries;
    /// this is a hint for callers that do.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UpstreamFailure { .. })
    }
}

/// Registry construction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No handler was registered
    #[error("registry must contain at least one handler")]
    Empty,

    /// The configured default key has no matching registration
    #[error("default provider '{provider}' is not registered")]
    UnknownDefault { provider: String },
}

/// Anything that can go wrong while dispatching a request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// The payload failed envelope validation
    #[error("invalid request envelope: {0}")]
    Validation(#[from] ValidationError),

    /// The requested provider is not registered
    #[error("provider resolution failed: {0}")]
    UnknownProvider(#[from] UnknownProviderError),

    /// The resolved handler reported a failure
    #[error("handler invocation failed: {0}")]
    Handler(#[from] HandlerError),
}
