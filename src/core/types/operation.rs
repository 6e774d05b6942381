//! Operation identifiers for the dispatch surface

use serde::{Deserialize, Serialize};

/// The operations a handler can expose
///
/// Chat completion is mandatory for every handler; the remaining
/// operations are optional capabilities that default to an unimplemented
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Multi-turn chat completion
    ChatCompletion,
    /// Single-prompt text completion
    Completion,
    /// Text embedding generation
    Embeddings,
}

impl Operation {
    /// Every operation a handler can declare
    pub const ALL: [Operation; 3] = [
        Operation::ChatCompletion,
        Operation::Completion,
        Operation::Embeddings,
    ];

    /// Stable wire name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ChatCompletion => "chat_completion",
            Operation::Completion => "completion",
            Operation::Embeddings => "embeddings",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
