//! HTTP server integration tests
//!
//! Tests the configured server surface end to end: registry construction
//! from configuration, route handlers, and the HTTP error contract.

#[cfg(test)]
mod tests {
    use actix_web::{ResponseError, web};
    use modelgate::config::{Config, ProviderConfig};
    use modelgate::core::dispatch::Dispatcher;
    use modelgate::core::handlers::HandlerRegistry;
    use modelgate::server::routes::{ai, health};
    use modelgate::server::{AppState, HttpServer};
    use modelgate::utils::error::{ErrorResponse, GatewayError};
    use serde_json::{Value, json};
    use std::sync::Arc;

    use crate::common::FailingHandler;

    fn two_provider_config() -> Config {
        Config {
            providers: vec![
                ProviderConfig::new("azure", "azure-openai"),
                ProviderConfig::new("openai", "openai"),
            ],
            default_provider: Some("azure".to_string()),
            ..Config::default()
        }
    }

    fn configured_state() -> web::Data<AppState> {
        let server = HttpServer::new(&two_provider_config()).unwrap();
        web::Data::new(server.state().clone())
    }

    fn failing_state() -> web::Data<AppState> {
        let failing = FailingHandler::new("azure-broken", "api key sk-secret rejected");
        let registry = HandlerRegistry::builder()
            .with_handler("azure", Arc::new(failing))
            .build()
            .unwrap();
        web::Data::new(AppState::new(
            Config::default(),
            Dispatcher::new(Arc::new(registry)),
        ))
    }

    async fn json_body(response: actix_web::HttpResponse) -> Value {
        let bytes = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn error_body(error: GatewayError) -> (u16, ErrorResponse) {
        let response = error.error_response();
        let status = response.status().as_u16();
        let bytes = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    // ==================== Happy Paths ====================

    /// Test the documented chat completion exchange over the HTTP surface
    #[tokio::test]
    async fn test_chat_completions_round_trip() {
        let state = configured_state();
        let payload = web::Json(json!({"input": "hello", "parameters": {}}));

        let response = ai::chat_completions(state, payload).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let body = json_body(response).await;
        assert_eq!(body, json!({"result": "chat completion (stub)", "usage": {}}));
    }

    /// Test the completions route against the default provider
    #[tokio::test]
    async fn test_completions_round_trip() {
        let state = configured_state();
        let payload = web::Json(json!({"input": "hello"}));

        let response = ai::completions(state, payload).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["result"], json!("completion (stub)"));
    }

    // ==================== Error Contract ====================

    /// Test that an empty payload maps to a 400 naming the failing field
    #[tokio::test]
    async fn test_missing_input_maps_to_bad_request() {
        let state = configured_state();
        let payload = web::Json(json!({}));

        let error = ai::chat_completions(state, payload).await.unwrap_err();
        let (status, body) = error_body(error).await;

        assert_eq!(status, 400);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert!(body.error.message.contains("input"));
    }

    /// Test that an unknown provider key maps to a 404
    #[tokio::test]
    async fn test_unknown_provider_maps_to_not_found() {
        let state = configured_state();
        let payload = web::Json(json!({"input": "hello", "provider": "bedrock"}));

        let error = ai::chat_completions(state, payload).await.unwrap_err();
        let (status, body) = error_body(error).await;

        assert_eq!(status, 404);
        assert_eq!(body.error.code, "PROVIDER_NOT_FOUND");
        assert!(body.error.message.contains("bedrock"));
    }

    /// Test that an operation the handler lacks maps to a 501
    #[tokio::test]
    async fn test_unimplemented_operation_maps_to_501() {
        let state = configured_state();
        let payload = web::Json(json!({"input": "hello", "provider": "openai"}));

        let error = ai::embeddings(state, payload).await.unwrap_err();
        let (status, body) = error_body(error).await;

        assert_eq!(status, 501);
        assert_eq!(body.error.code, "NOT_IMPLEMENTED");
        assert!(body.error.message.contains("embeddings"));
    }

    /// Test that upstream failures map to a 502 without upstream detail
    #[tokio::test]
    async fn test_upstream_failure_maps_to_bad_gateway() {
        let state = failing_state();
        let payload = web::Json(json!({"input": "hello"}));

        let error = ai::chat_completions(state, payload).await.unwrap_err();
        let (status, body) = error_body(error).await;

        assert_eq!(status, 502);
        assert_eq!(body.error.code, "UPSTREAM_ERROR");
        assert!(!body.error.message.contains("sk-secret"));
    }

    // ==================== Status Endpoints ====================

    /// Test that the health endpoint reports the registry summary
    #[tokio::test]
    async fn test_health_reports_registry_summary() {
        let state = configured_state();

        let response = health::health_check(state).await;
        assert_eq!(response.status().as_u16(), 200);

        let body = json_body(response).await;
        assert_eq!(body["status"], json!("healthy"));
        assert_eq!(body["providers"]["count"], json!(2));
        assert_eq!(body["providers"]["default"], json!("azure"));
    }

    /// Test that the provider listing names keys, handlers, and operations
    #[tokio::test]
    async fn test_provider_listing() {
        let state = configured_state();

        let response = health::list_providers(state).await;
        let body = json_body(response).await;

        assert_eq!(body["default_provider"], json!("azure"));
        let providers = body["providers"].as_array().unwrap();
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0]["name"], json!("azure"));
        assert_eq!(providers[0]["handler"], json!("azure"));
        assert_eq!(providers[1]["name"], json!("openai"));
        assert!(
            providers[1]["operations"]
                .as_array()
                .unwrap()
                .contains(&json!("chat_completion"))
        );
    }

    /// Test that disabled providers stay off the HTTP surface
    #[tokio::test]
    async fn test_disabled_provider_is_not_listed() {
        let mut config = two_provider_config();
        config.providers[1].enabled = false;
        let server = HttpServer::new(&config).unwrap();
        let state = web::Data::new(server.state().clone());

        let response = health::list_providers(state).await;
        let body = json_body(response).await;
        assert_eq!(body["providers"].as_array().unwrap().len(), 1);
    }
}
