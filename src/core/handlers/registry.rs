//! Handler registry
//!
//! Maps provider keys to shared handler instances and owns the resolution
//! policy: explicit key, then configured default, otherwise unknown
//! provider.
//!
//! Reads are lock-free snapshot loads. `register` swaps in a rebuilt
//! snapshot, so readers never observe a partially updated mapping and
//! handlers already resolved keep serving their in-flight requests.

use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::traits::LLMHandler;
use crate::core::types::{ModelRequest, RegistryError, UnknownProviderError};

/// Concurrent provider-key to handler mapping
///
/// Built through [`HandlerRegistryBuilder`], which guarantees at least one
/// registration and a resolvable default key.
pub struct HandlerRegistry {
    handlers: ArcSwap<HashMap<String, Arc<dyn LLMHandler>>>,
    default_provider: String,
}

impl HandlerRegistry {
    /// Start building a registry
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::new()
    }

    /// Register a handler under a provider key
    ///
    /// Inserting an existing key replaces the previous handler. Requests
    /// that already resolved the old handler finish against it; only
    /// subsequent resolutions see the replacement.
    pub fn register(&self, key: impl Into<String>, handler: Arc<dyn LLMHandler>) {
        let key = key.into();
        self.handlers.rcu(|snapshot| {
            let mut next = HashMap::clone(snapshot);
            next.insert(key.clone(), Arc::clone(&handler));
            next
        });
    }

    /// Resolve the handler responsible for a request
    ///
    /// A request without an explicit provider key resolves to the default
    /// handler, which exists by construction.
    pub fn resolve(
        &self,
        request: &ModelRequest,
    ) -> Result<Arc<dyn LLMHandler>, UnknownProviderError> {
        let key = request.provider().unwrap_or(self.default_provider.as_str());
        self.handlers
            .load()
            .get(key)
            .cloned()
            .ok_or_else(|| UnknownProviderError::new(key))
    }

    /// Get a handler by provider key
    pub fn get(&self, key: &str) -> Option<Arc<dyn LLMHandler>> {
        self.handlers.load().get(key).cloned()
    }

    /// Check whether a provider key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.handlers.load().contains_key(key)
    }

    /// Registered provider keys in sorted order
    pub fn list_providers(&self) -> Vec<String> {
        let mut providers: Vec<String> = self.handlers.load().keys().cloned().collect();
        providers.sort();
        providers
    }

    /// Key of the default provider
    pub fn default_provider(&self) -> &str {
        &self.default_provider
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.load().len()
    }

    /// Whether the registry has no handlers
    ///
    /// Always false for registries built through the builder.
    pub fn is_empty(&self) -> bool {
        self.handlers.load().is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("providers", &self.list_providers())
            .field("default_provider", &self.default_provider)
            .finish()
    }
}

/// Builder that only produces usable registries
///
/// An empty registry or a default key without a matching registration
/// cannot be built, which is what makes key-less resolution total.
pub struct HandlerRegistryBuilder {
    handlers: Vec<(String, Arc<dyn LLMHandler>)>,
    default_provider: Option<String>,
}

impl HandlerRegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            default_provider: None,
        }
    }

    /// Register a handler under a provider key
    ///
    /// The first registered key becomes the default unless
    /// [`with_default_provider`](Self::with_default_provider) overrides
    /// it. Re-registering a key keeps its position and replaces the
    /// handler.
    pub fn with_handler(mut self, key: impl Into<String>, handler: Arc<dyn LLMHandler>) -> Self {
        let key = key.into();
        if let Some(index) = self.handlers.iter().position(|(existing, _)| existing == &key) {
            self.handlers[index].1 = handler;
        } else {
            self.handlers.push((key, handler));
        }
        self
    }

    /// Override the default provider key
    pub fn with_default_provider(mut self, key: impl Into<String>) -> Self {
        self.default_provider = Some(key.into());
        self
    }

    /// Build the registry
    pub fn build(self) -> Result<HandlerRegistry, RegistryError> {
        let first_key = match self.handlers.first() {
            Some((key, _)) => key.clone(),
            None => return Err(RegistryError::Empty),
        };

        let default_provider = self.default_provider.unwrap_or(first_key);
        let handlers: HashMap<String, Arc<dyn LLMHandler>> = self.handlers.into_iter().collect();

        if !handlers.contains_key(&default_provider) {
            return Err(RegistryError::UnknownDefault {
                provider: default_provider,
            });
        }

        Ok(HandlerRegistry {
            handlers: ArcSwap::from_pointee(handlers),
            default_provider,
        })
    }
}

impl Default for HandlerRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
