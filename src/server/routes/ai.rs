//! AI API endpoints
//!
//! Thin HTTP adapters over the dispatcher. Payloads arrive as raw JSON so
//! envelope validation happens in one place instead of per route.

use crate::core::types::Operation;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use serde_json::Value;
use tracing::debug;

/// Chat completions endpoint
pub async fn chat_completions(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    dispatch(&state, payload.into_inner(), Operation::ChatCompletion).await
}

/// Text completions endpoint
pub async fn completions(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    dispatch(&state, payload.into_inner(), Operation::Completion).await
}

/// Embeddings endpoint
pub async fn embeddings(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    dispatch(&state, payload.into_inner(), Operation::Embeddings).await
}

async fn dispatch(
    state: &AppState,
    payload: Value,
    operation: Operation,
) -> Result<HttpResponse, GatewayError> {
    debug!(%operation, "received request");
    let response = state.dispatcher.dispatch(payload, operation).await?;
    Ok(HttpResponse::Ok().json(response))
}
