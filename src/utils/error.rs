//! Error handling for the gateway
//!
//! Defines the top-level error type and its mapping onto HTTP responses.
//! Client-caused failures keep their detail in the body; upstream and
//! internal failures get a generic message.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::types::{DispatchError, HandlerError, RegistryError};

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Registry construction errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Request dispatch errors
    #[error("{0}")]
    Dispatch(#[from] DispatchError),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl ResponseError for GatewayError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            GatewayError::Dispatch(DispatchError::Validation(validation_error)) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                validation_error.to_string(),
            ),
            GatewayError::Dispatch(DispatchError::UnknownProvider(unknown_provider)) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "PROVIDER_NOT_FOUND",
                unknown_provider.to_string(),
            ),
            GatewayError::Dispatch(DispatchError::Handler(handler_error)) => match handler_error {
                HandlerError::InvalidRequest { .. } => (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "INVALID_REQUEST",
                    handler_error.to_string(),
                ),
                HandlerError::Unimplemented { .. } => (
                    actix_web::http::StatusCode::NOT_IMPLEMENTED,
                    "NOT_IMPLEMENTED",
                    handler_error.to_string(),
                ),
                // Upstream detail stays in the server logs.
                HandlerError::UpstreamFailure { .. } => (
                    actix_web::http::StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The upstream provider failed to process the request".to_string(),
                ),
            },
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None, // This should be set by middleware
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
