//! Anthropic transport trait and reqwest-based HTTP implementation.

use reqwest::Client;

use crate::{ProviderFuture, SecretString};

use super::serde_api::{AnthropicApiResponse, build_api_request, classify_error};
use super::types::{AnthropicApiError, AnthropicRequest, AnthropicResponse};

pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

pub trait AnthropicTransport: Send + Sync + std::fmt::Debug {
    fn complete<'a>(
        &'a self,
        request: AnthropicRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<AnthropicResponse, AnthropicApiError>>;
}

#[derive(Debug, Clone)]
pub struct AnthropicHttpTransport {
    client: Client,
    base_url: String,
}

impl AnthropicHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: ANTHROPIC_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl AnthropicTransport for AnthropicHttpTransport {
    fn complete<'a>(
        &'a self,
        request: AnthropicRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<AnthropicResponse, AnthropicApiError>> {
        Box::pin(async move {
            let api_request = build_api_request(request);
            let response = self
                .client
                .post(self.endpoint("messages"))
                .header("x-api-key", api_key.expose())
                .header("anthropic-version", ANTHROPIC_API_VERSION)
                .json(&api_request)
                .send()
                .await
                .map_err(|err| AnthropicApiError::Connection(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(classify_error(status.as_u16(), &body));
            }

            let parsed: AnthropicApiResponse = response
                .json()
                .await
                .map_err(|err| AnthropicApiError::Decode(err.to_string()))?;

            Ok(AnthropicResponse::from(parsed))
        })
    }
}
