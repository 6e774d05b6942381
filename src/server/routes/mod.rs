//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod ai;
pub mod health;

use actix_web::web;

/// Wire up every route the gateway serves
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/v1")
                .route("/chat/completions", web::post().to(ai::chat_completions))
                .route("/completions", web::post().to(ai::completions))
                .route("/embeddings", web::post().to(ai::embeddings))
                .route("/providers", web::get().to(health::list_providers)),
        );
}
