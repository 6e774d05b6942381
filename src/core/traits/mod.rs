//! Core traits module
//!
//! Contains the abstract interfaces backend implementations plug into.

pub mod handler;

pub use handler::LLMHandler;
