//! Core type definition module
//!
//! The request/response envelopes, the operation identifiers, and the
//! request-path error taxonomy.

pub mod errors;
pub mod operation;
pub mod request;
pub mod response;

// Re-export all public types
pub use errors::{
    DispatchError, HandlerError, RegistryError, UnknownProviderError, ValidationError,
};
pub use operation::Operation;
pub use request::ModelRequest;
pub use response::{HandlerOutput, ModelResponse};
