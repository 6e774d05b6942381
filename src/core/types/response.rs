//! Response envelope and handler output

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The success value a handler operation returns
///
/// `result` is opaque to the dispatch path; `usage` carries whatever
/// accounting metadata the provider reports.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerOutput {
    result: Value,
    usage: Map<String, Value>,
}

impl HandlerOutput {
    /// Wrap a provider result with no usage metadata
    pub fn new(result: impl Into<Value>) -> Self {
        Self {
            result: result.into(),
            usage: Map::new(),
        }
    }

    /// Attach usage metadata
    pub fn with_usage(mut self, usage: Map<String, Value>) -> Self {
        self.usage = usage;
        self
    }

    /// The provider result
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// Usage metadata reported by the provider
    pub fn usage(&self) -> &Map<String, Value> {
        &self.usage
    }
}

/// Normalized response envelope returned by every operation
///
/// Both fields are always present on the wire; an absent usage report
/// serializes as an empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    result: Value,
    #[serde(default)]
    usage: Map<String, Value>,
}

impl ModelResponse {
    /// Wrap an opaque result with no usage metadata
    pub fn new(result: impl Into<Value>) -> Self {
        Self {
            result: result.into(),
            usage: Map::new(),
        }
    }

    /// Attach usage metadata
    pub fn with_usage(mut self, usage: Map<String, Value>) -> Self {
        self.usage = usage;
        self
    }

    /// The opaque result value
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// Usage metadata
    pub fn usage(&self) -> &Map<String, Value> {
        &self.usage
    }
}

impl From<HandlerOutput> for ModelResponse {
    fn from(output: HandlerOutput) -> Self {
        Self {
            result: output.result,
            usage: output.usage,
        }
    }
}
