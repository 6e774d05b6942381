//! Core functionality for the gateway
//!
//! Contains the dispatch pipeline and the data structures it moves.

pub mod dispatch;
pub mod handlers;
pub mod traits;
pub mod types;

pub use dispatch::Dispatcher;
pub use handlers::{HandlerRegistry, HandlerRegistryBuilder};
pub use traits::LLMHandler;
