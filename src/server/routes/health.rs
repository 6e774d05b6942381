//! Health check and status endpoints
//!
//! This module provides health check and provider listing endpoints.

use crate::core::types::Operation;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use std::borrow::Cow;

use tracing::debug;

/// Basic health check endpoint
///
/// Returns a simple health status indicating if the service is running.
/// This endpoint is typically used by load balancers and monitoring systems.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let registry = state.registry();
    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build: Cow::Borrowed(env!("GIT_HASH")),
        uptime_seconds: get_uptime_seconds(),
        providers: ProviderSummary {
            count: registry.len(),
            default: registry.default_provider().to_string(),
        },
    };

    HttpResponse::Ok().json(health_status)
}

/// Provider listing endpoint
///
/// Returns every registered provider key with its handler and the
/// operations that handler declares.
pub async fn list_providers(state: web::Data<AppState>) -> HttpResponse {
    debug!("Provider list requested");

    let registry = state.registry();
    let providers = registry
        .list_providers()
        .into_iter()
        .filter_map(|name| {
            registry.get(&name).map(|handler| ProviderInfo {
                name,
                handler: handler.name(),
                operations: handler.operations().to_vec(),
            })
        })
        .collect();

    HttpResponse::Ok().json(ProvidersResponse {
        providers,
        default_provider: registry.default_provider().to_string(),
    })
}

/// Basic health status
#[derive(Debug, Clone, serde::Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
    build: Cow<'static, str>,
    uptime_seconds: u64,
    providers: ProviderSummary,
}

/// Registry summary embedded in the health status
#[derive(Debug, Clone, serde::Serialize)]
struct ProviderSummary {
    count: usize,
    default: String,
}

/// Provider listing response
#[derive(Debug, Clone, serde::Serialize)]
struct ProvidersResponse {
    providers: Vec<ProviderInfo>,
    default_provider: String,
}

/// Single provider entry in the listing
#[derive(Debug, Clone, serde::Serialize)]
struct ProviderInfo {
    name: String,
    handler: &'static str,
    operations: Vec<Operation>,
}

/// Get system uptime in seconds
fn get_uptime_seconds() -> u64 {
    static START_TIME: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
    let start = START_TIME.get_or_init(std::time::Instant::now);
    start.elapsed().as_secs()
}
