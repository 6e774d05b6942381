//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::dispatch::Dispatcher;
use crate::core::handlers::HandlerRegistry;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across threads.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Request dispatcher
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, dispatcher: Dispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the handler registry backing the dispatcher
    pub fn registry(&self) -> &Arc<HandlerRegistry> {
        self.dispatcher.registry()
    }
}
