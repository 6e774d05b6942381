//! Request envelope
//!
//! `ModelRequest` is the single normalized shape every operation accepts.
//! A value of this type is only obtainable through validated construction,
//! so downstream code never re-checks the required fields.

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::ValidationError;

/// Normalized request envelope accepted by every operation
///
/// Invariants enforced at construction:
/// - `input` is non-empty after trimming (the value is stored untrimmed)
/// - `parameters` is always an object, defaulting to empty
/// - `provider`, when present, is a non-empty selection key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRequest {
    input: String,
    parameters: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
}

impl ModelRequest {
    /// Create an envelope from an in-process caller
    ///
    /// Applies the same emptiness rule as wire-level construction.
    pub fn new(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(Self {
            input,
            parameters: Map::new(),
            provider: None,
        })
    }

    /// Attach provider-specific parameters
    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Route the request to a specific provider key
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Build an envelope from an untyped JSON payload
    ///
    /// Unknown fields are ignored. Field errors are reported in a fixed
    /// order: `input` first, then `parameters`, then `provider`.
    pub fn from_value(payload: Value) -> Result<Self, ValidationError> {
        let mut object = match payload {
            Value::Object(object) => object,
            _ => return Err(ValidationError::NotAnObject),
        };

        let input = match object.remove("input") {
            Some(Value::String(input)) => input,
            Some(_) => return Err(ValidationError::InputNotAString),
            None => return Err(ValidationError::MissingInput),
        };
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let parameters = match object.remove("parameters") {
            Some(Value::Object(parameters)) => parameters,
            Some(_) => return Err(ValidationError::InvalidParameters),
            None => Map::new(),
        };

        let provider = match object.remove("provider") {
            Some(Value::String(provider)) if !provider.is_empty() => Some(provider),
            Some(_) => return Err(ValidationError::InvalidProvider),
            None => None,
        };

        Ok(Self {
            input,
            parameters,
            provider,
        })
    }

    /// The prompt or content the operation runs on
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Provider-specific parameters, opaque to the dispatch path
    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Explicit provider selection key, if any
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }
}

impl TryFrom<Value> for ModelRequest {
    type Error = ValidationError;

    fn try_from(payload: Value) -> Result<Self, Self::Error> {
        Self::from_value(payload)
    }
}
