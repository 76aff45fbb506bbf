#![cfg(feature = "provider-anthropic")]

use std::sync::{Arc, Mutex};

use mprovider::adapters::anthropic::{
    AnthropicApiError, AnthropicProvider, AnthropicRequest, AnthropicResponse, AnthropicRole,
    AnthropicTransport, AnthropicUsage, DEFAULT_ANTHROPIC_MODEL,
};
use mprovider::{
    CompletionProvider, CompletionRequest, Message, ProviderErrorKind, ProviderFuture,
    ProviderId, SecretString, TokenUsage,
};

#[derive(Debug)]
struct FakeTransport {
    captured_key: Mutex<Option<String>>,
    captured_request: Mutex<Option<AnthropicRequest>>,
    outcome: Result<AnthropicResponse, AnthropicApiError>,
}

impl FakeTransport {
    fn replying(text: &str, usage: AnthropicUsage) -> Self {
        Self::with_outcome(Ok(AnthropicResponse {
            model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            text: text.to_string(),
            usage,
        }))
    }

    fn with_outcome(outcome: Result<AnthropicResponse, AnthropicApiError>) -> Self {
        Self {
            captured_key: Mutex::new(None),
            captured_request: Mutex::new(None),
            outcome,
        }
    }
}

impl AnthropicTransport for FakeTransport {
    fn complete<'a>(
        &'a self,
        request: AnthropicRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<AnthropicResponse, AnthropicApiError>> {
        Box::pin(async move {
            *self.captured_request.lock().expect("request lock") = Some(request);
            *self.captured_key.lock().expect("key lock") = Some(api_key.expose().to_string());
            self.outcome.clone()
        })
    }
}

fn request() -> CompletionRequest {
    CompletionRequest::new("You are kind.", vec![Message::user("Had a great day")])
        .with_temperature(0.7)
        .with_max_tokens(1024)
}

#[tokio::test]
async fn complete_maps_response_and_computes_total_tokens() {
    let transport = Arc::new(FakeTransport::replying(
        "How did that make you feel?",
        AnthropicUsage {
            input_tokens: 120,
            output_tokens: 30,
        },
    ));
    let provider =
        AnthropicProvider::new("sk-ant-test", transport.clone()).expect("provider should build");

    let response = provider.complete(request()).await.expect("complete");

    assert_eq!(provider.id(), ProviderId::Anthropic);
    assert_eq!(response.content, "How did that make you feel?");
    assert_eq!(response.model, DEFAULT_ANTHROPIC_MODEL);
    assert_eq!(response.token_usage, TokenUsage::new(120, 30));
    assert_eq!(response.token_usage.total_tokens, 150);

    let captured = transport
        .captured_request
        .lock()
        .expect("request lock")
        .clone()
        .expect("request captured");
    assert_eq!(captured.system, "You are kind.");
    assert_eq!(captured.temperature, 0.7);
    assert_eq!(captured.max_tokens, 1024);
    assert_eq!(captured.messages.len(), 1);
    assert_eq!(captured.messages[0].role, AnthropicRole::User);
    assert_eq!(captured.messages[0].content, "Had a great day");
    assert_eq!(
        transport.captured_key.lock().expect("key lock").as_deref(),
        Some("sk-ant-test")
    );
}

#[tokio::test]
async fn complete_normalizes_vendor_errors() {
    let cases = [
        (
            AnthropicApiError::RateLimit {
                message: "slow".to_string(),
            },
            ProviderErrorKind::RateLimited,
            "AI rate limit exceeded",
        ),
        (
            AnthropicApiError::Authentication {
                message: "bad key".to_string(),
            },
            ProviderErrorKind::AuthFailed,
            "AI authentication failed",
        ),
        (
            AnthropicApiError::Api {
                status: 529,
                message: "Overloaded".to_string(),
            },
            ProviderErrorKind::Upstream,
            "AI provider error: Overloaded",
        ),
        (
            AnthropicApiError::Connection("connection reset".to_string()),
            ProviderErrorKind::Upstream,
            "Unexpected AI error",
        ),
    ];

    for (vendor_error, kind, message) in cases {
        let provider = AnthropicProvider::new(
            "sk-ant-test",
            Arc::new(FakeTransport::with_outcome(Err(vendor_error))),
        )
        .expect("provider should build");

        let error = provider.complete(request()).await.expect_err("should fail");
        assert_eq!(error.kind, kind);
        assert_eq!(error.message, message);
    }
}

#[tokio::test]
async fn invalid_request_is_rejected_before_transport() {
    let transport = Arc::new(FakeTransport::replying("unused", AnthropicUsage::default()));
    let provider =
        AnthropicProvider::new("sk-ant-test", transport.clone()).expect("provider should build");

    let error = provider
        .complete(CompletionRequest::new("sys", Vec::new()))
        .await
        .expect_err("empty messages should fail");

    assert_eq!(error.kind, ProviderErrorKind::Upstream);
    assert!(
        transport
            .captured_request
            .lock()
            .expect("request lock")
            .is_none()
    );
}

#[test]
fn construction_fails_without_credential() {
    let transport = Arc::new(FakeTransport::replying("unused", AnthropicUsage::default()));
    let error = AnthropicProvider::new("", transport).expect_err("empty key");
    assert_eq!(error.kind, ProviderErrorKind::Config);
    assert_eq!(error.message, "ANTHROPIC_API_KEY is required");
}

#[test]
fn estimate_cost_is_linear_in_each_direction() {
    let provider = AnthropicProvider::new(
        "sk-ant-test",
        Arc::new(FakeTransport::replying("unused", AnthropicUsage::default())),
    )
    .expect("provider should build");

    let cost = provider.estimate_cost(&TokenUsage::new(2_000, 1_000));
    assert!((cost - 0.021).abs() < 1e-12, "unexpected cost {cost}");
}
