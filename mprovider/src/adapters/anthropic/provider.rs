//! Anthropic provider implementation over transport and shared models.

use std::sync::Arc;

use reqwest::Client;

use crate::{
    CompletionProvider, CompletionRequest, CompletionResponse, ModelPricing, ProviderError,
    ProviderFuture, ProviderId, SecretString, TokenUsage,
};

use super::transport::{AnthropicHttpTransport, AnthropicTransport};
use super::types::{AnthropicApiError, AnthropicMessage, AnthropicRequest};

pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";

/// US dollars per million input tokens for the Claude Sonnet tier.
pub const CLAUDE_SONNET_INPUT_COST_PER_MILLION: f64 = 3.0;
/// US dollars per million output tokens for the Claude Sonnet tier.
pub const CLAUDE_SONNET_OUTPUT_COST_PER_MILLION: f64 = 15.0;

pub const CLAUDE_SONNET_PRICING: ModelPricing = ModelPricing::new(
    CLAUDE_SONNET_INPUT_COST_PER_MILLION,
    CLAUDE_SONNET_OUTPUT_COST_PER_MILLION,
);

pub(crate) const MISSING_API_KEY_MESSAGE: &str = "ANTHROPIC_API_KEY is required";

#[derive(Clone)]
pub struct AnthropicProvider {
    api_key: SecretString,
    transport: Arc<dyn AnthropicTransport>,
    model: String,
    pricing: ModelPricing,
}

impl AnthropicProvider {
    /// Fails with a configuration error when `api_key` is blank.
    pub fn new(
        api_key: impl Into<SecretString>,
        transport: Arc<dyn AnthropicTransport>,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.is_blank() {
            return Err(ProviderError::config(MISSING_API_KEY_MESSAGE));
        }

        Ok(Self {
            api_key,
            transport,
            model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            pricing: CLAUDE_SONNET_PRICING,
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn pricing(&self) -> ModelPricing {
        self.pricing
    }

    pub fn default_http_transport(client: Client) -> AnthropicHttpTransport {
        AnthropicHttpTransport::new(client)
    }

    pub(crate) fn build_request(&self, request: CompletionRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: self.model.clone(),
            system: request.system_prompt,
            messages: request
                .messages
                .into_iter()
                .map(AnthropicMessage::from)
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

impl std::fmt::Debug for AnthropicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("api_key", &self.api_key)
            .field("transport", &self.transport)
            .field("model", &self.model)
            .field("pricing", &self.pricing)
            .finish()
    }
}

pub(crate) fn map_api_error(error: AnthropicApiError) -> ProviderError {
    match error {
        AnthropicApiError::RateLimit { .. } => {
            ProviderError::rate_limited("AI rate limit exceeded")
        }
        AnthropicApiError::Authentication { .. } => {
            ProviderError::auth_failed("AI authentication failed")
        }
        AnthropicApiError::Api { message, .. } => {
            ProviderError::upstream(format!("AI provider error: {message}"))
        }
        AnthropicApiError::Connection(_) | AnthropicApiError::Decode(_) => {
            ProviderError::upstream("Unexpected AI error")
        }
    }
}

impl CompletionProvider for AnthropicProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    fn complete<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, Result<CompletionResponse, ProviderError>> {
        Box::pin(async move {
            request.validate()?;
            let anthropic_request = self.build_request(request);
            let response = self
                .transport
                .complete(anthropic_request, self.api_key.clone())
                .await
                .map_err(map_api_error)?;

            Ok(CompletionResponse {
                content: response.text,
                token_usage: TokenUsage::from(response.usage),
                model: response.model,
            })
        })
    }

    fn estimate_cost(&self, usage: &TokenUsage) -> f64 {
        self.pricing.estimate(usage)
    }
}
