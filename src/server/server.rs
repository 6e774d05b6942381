//! HTTP server core implementation
//!
//! Builds the handler registry from configuration and exposes the
//! dispatch pipeline over HTTP.

use crate::config::{Config, ServerConfig};
use crate::core::dispatch::Dispatcher;
use crate::core::handlers::{self, HandlerRegistry};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// Providers that fail to initialize are skipped with a warning. The
    /// server refuses to start only when no handler could be registered
    /// or the configured default resolves to nothing.
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let registry = Self::build_registry(config)?;
        let dispatcher = Dispatcher::new(Arc::new(registry));
        let state = AppState::new(config.clone(), dispatcher);

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Build the handler registry from provider configuration
    fn build_registry(config: &Config) -> Result<HandlerRegistry> {
        let mut builder = HandlerRegistry::builder();

        for provider_config in config.providers() {
            if !provider_config.enabled {
                debug!("Provider {} is disabled, skipping", provider_config.name);
                continue;
            }

            match handlers::from_config(provider_config) {
                Ok(handler) => {
                    builder = builder.with_handler(provider_config.name.as_str(), handler);
                    info!("Registered provider: {}", provider_config.name);
                }
                Err(e) => {
                    warn!(
                        "Failed to initialize provider {}: {}",
                        provider_config.name, e
                    );
                }
            }
        }

        if let Some(default_provider) = config.default_provider() {
            builder = builder.with_default_provider(default_provider);
        }

        let registry = builder.build()?;
        info!(
            "Handler registry ready: {} providers, default '{}'",
            registry.len(),
            registry.default_provider()
        );
        Ok(registry)
    }

    /// Create the Actix-web application
    fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "modelgate")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
