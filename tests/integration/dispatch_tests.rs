//! Dispatch pipeline integration tests
//!
//! End-to-end tests for the validate, resolve, invoke, wrap pipeline,
//! including the exact envelope shapes produced on the happy path.

#[cfg(test)]
mod tests {
    use modelgate::core::dispatch::Dispatcher;
    use modelgate::core::handlers::{AzureOpenAIHandler, HandlerRegistry};
    use modelgate::core::traits::LLMHandler;
    use modelgate::core::types::{
        DispatchError, HandlerError, ModelRequest, Operation, ValidationError,
    };
    use serde_json::{Map, json};
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use crate::common::{CountingHandler, FailingHandler, PendingHandler, StaticHandler};

    fn dispatcher_with(key: &str, handler: Arc<dyn LLMHandler>) -> Dispatcher {
        let registry = HandlerRegistry::builder()
            .with_handler(key, handler)
            .build()
            .unwrap();
        Dispatcher::new(Arc::new(registry))
    }

    // ==================== Happy Path ====================

    /// Test the documented request and response envelopes end to end
    #[tokio::test]
    async fn test_chat_completion_envelope_shape() {
        let dispatcher = dispatcher_with("azure", Arc::new(AzureOpenAIHandler::default()));

        let response = dispatcher
            .dispatch(
                json!({"input": "hello", "parameters": {}}),
                Operation::ChatCompletion,
            )
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"result": "chat completion (stub)", "usage": {}})
        );
    }

    /// Test dispatching an already validated request
    #[tokio::test]
    async fn test_dispatch_validated_request() {
        let dispatcher = dispatcher_with("azure", Arc::new(AzureOpenAIHandler::default()));
        let request = ModelRequest::new("hello").unwrap();

        let response = dispatcher
            .dispatch_request(&request, Operation::Completion)
            .await
            .unwrap();

        assert_eq!(response.result(), &json!("completion (stub)"));
    }

    /// Test that handler usage metadata lands in the response envelope
    #[tokio::test]
    async fn test_usage_metadata_flows_through() {
        let mut usage = Map::new();
        usage.insert("total_tokens".to_string(), json!(42));
        let handler = StaticHandler::new("scripted", "scripted reply").with_usage(usage);
        let dispatcher = dispatcher_with("scripted", Arc::new(handler));

        let response = dispatcher
            .dispatch(json!({"input": "hello"}), Operation::ChatCompletion)
            .await
            .unwrap();

        assert_eq!(response.result(), &json!("scripted reply"));
        assert_eq!(response.usage()["total_tokens"], json!(42));
    }

    /// Test that the provider key routes between registered handlers
    #[tokio::test]
    async fn test_provider_key_selects_handler() {
        let registry = HandlerRegistry::builder()
            .with_handler("azure", Arc::new(StaticHandler::new("azure-stub", "from azure")))
            .with_handler(
                "openai",
                Arc::new(StaticHandler::new("openai-stub", "from openai")),
            )
            .build()
            .unwrap();
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let response = dispatcher
            .dispatch(
                json!({"input": "hello", "provider": "openai"}),
                Operation::ChatCompletion,
            )
            .await
            .unwrap();
        assert_eq!(response.result(), &json!("from openai"));

        // Without a key the first registration answers.
        let response = dispatcher
            .dispatch(json!({"input": "hello"}), Operation::ChatCompletion)
            .await
            .unwrap();
        assert_eq!(response.result(), &json!("from azure"));
    }

    // ==================== Validation ====================

    /// Test that a malformed envelope never reaches a handler
    #[tokio::test]
    async fn test_validation_precedes_handler_invocation() {
        let counting = CountingHandler::new();
        let calls = counting.calls();
        let dispatcher = dispatcher_with("counting", Arc::new(counting));

        let error = dispatcher
            .dispatch(json!({}), Operation::ChatCompletion)
            .await
            .unwrap_err();

        assert_eq!(
            error,
            DispatchError::Validation(ValidationError::MissingInput)
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    /// Test that whitespace-only input is rejected as empty
    #[tokio::test]
    async fn test_blank_input_is_rejected() {
        let counting = CountingHandler::new();
        let calls = counting.calls();
        let dispatcher = dispatcher_with("counting", Arc::new(counting));

        let error = dispatcher
            .dispatch(json!({"input": "   "}), Operation::ChatCompletion)
            .await
            .unwrap_err();

        assert_eq!(error, DispatchError::Validation(ValidationError::EmptyInput));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    /// Test that a non-object parameters field is rejected
    #[tokio::test]
    async fn test_parameters_must_be_an_object() {
        let dispatcher = dispatcher_with("azure", Arc::new(AzureOpenAIHandler::default()));

        let error = dispatcher
            .dispatch(
                json!({"input": "hello", "parameters": []}),
                Operation::ChatCompletion,
            )
            .await
            .unwrap_err();

        assert_eq!(
            error,
            DispatchError::Validation(ValidationError::InvalidParameters)
        );
    }

    // ==================== Failure Paths ====================

    /// Test that an unknown provider key fails resolution
    #[tokio::test]
    async fn test_unknown_provider_key_is_rejected() {
        let dispatcher = dispatcher_with("azure", Arc::new(AzureOpenAIHandler::default()));

        let error = dispatcher
            .dispatch(
                json!({"input": "hello", "provider": "bedrock"}),
                Operation::ChatCompletion,
            )
            .await
            .unwrap_err();

        assert!(matches!(error, DispatchError::UnknownProvider(_)));
    }

    /// Test that a failed invocation surfaces once, with no retry
    #[tokio::test]
    async fn test_upstream_failure_is_not_retried() {
        let failing = FailingHandler::new("flaky", "connection reset");
        let calls = failing.calls();
        let dispatcher = dispatcher_with("flaky", Arc::new(failing));

        let error = dispatcher
            .dispatch(json!({"input": "hello"}), Operation::ChatCompletion)
            .await
            .unwrap_err();

        assert_eq!(
            error,
            DispatchError::Handler(HandlerError::UpstreamFailure {
                handler: "flaky",
                message: "connection reset".to_string(),
            })
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    /// Test that optional operations report unimplemented
    #[tokio::test]
    async fn test_optional_operation_reports_unimplemented() {
        let dispatcher = dispatcher_with("scripted", Arc::new(StaticHandler::new("scripted", "reply")));

        let error = dispatcher
            .dispatch(json!({"input": "hello"}), Operation::Embeddings)
            .await
            .unwrap_err();

        assert_eq!(
            error,
            DispatchError::Handler(HandlerError::Unimplemented {
                handler: "scripted",
                operation: Operation::Embeddings,
            })
        );
    }

    // ==================== Cancellation ====================

    /// Test that abandoning a dispatch tears down the in-flight handler call
    #[tokio::test]
    async fn test_cancellation_reaches_the_handler() {
        let pending = PendingHandler::new();
        let entered = pending.entered();
        let cancelled = pending.cancelled();
        let dispatcher = dispatcher_with("pending", Arc::new(pending));

        let dispatch = dispatcher.dispatch(json!({"input": "hello"}), Operation::ChatCompletion);
        let raced = tokio::time::timeout(Duration::from_millis(50), dispatch).await;

        assert!(raced.is_err(), "the pending handler should never resolve");
        assert!(
            entered.load(Ordering::SeqCst),
            "the handler call should have started"
        );
        assert!(
            cancelled.load(Ordering::SeqCst),
            "dropping the dispatch should cancel the handler call"
        );
    }
}
