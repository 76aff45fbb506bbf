//! Anthropic Messages API payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use super::types::{
    AnthropicApiError, AnthropicMessage, AnthropicRequest, AnthropicResponse, AnthropicUsage,
};

pub(crate) fn build_api_request(request: AnthropicRequest) -> AnthropicApiRequest {
    AnthropicApiRequest {
        model: request.model,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        system: request.system,
        messages: request
            .messages
            .into_iter()
            .map(AnthropicApiMessage::from)
            .collect(),
    }
}

/// Classifies a non-success HTTP reply by status first, then by the error
/// type in the body.
pub(crate) fn classify_error(status: u16, body: &str) -> AnthropicApiError {
    let envelope = serde_json::from_str::<AnthropicApiErrorEnvelope>(body).ok();
    let error_type = envelope
        .as_ref()
        .map(|envelope| envelope.error.error_type.as_str())
        .unwrap_or_default();
    let message = envelope
        .as_ref()
        .map(|envelope| envelope.error.message.clone())
        .unwrap_or_else(|| format!("Anthropic request failed with status {status}"));

    match (status, error_type) {
        (429, _) | (_, "rate_limit_error") => AnthropicApiError::RateLimit { message },
        (401, _) | (_, "authentication_error") => AnthropicApiError::Authentication { message },
        _ => AnthropicApiError::Api { status, message },
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicApiErrorEnvelope {
    pub error: AnthropicApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicApiErrorBody {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnthropicApiRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system: String,
    pub messages: Vec<AnthropicApiMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnthropicApiMessage {
    pub role: &'static str,
    pub content: String,
}

impl From<AnthropicMessage> for AnthropicApiMessage {
    fn from(value: AnthropicMessage) -> Self {
        Self {
            role: value.role.as_str(),
            content: value.content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicApiResponse {
    pub model: String,
    #[serde(default)]
    pub content: Vec<AnthropicContentBlock>,
    pub usage: AnthropicApiUsage,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum AnthropicContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicApiUsage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

impl From<AnthropicApiResponse> for AnthropicResponse {
    fn from(value: AnthropicApiResponse) -> Self {
        let text = value
            .content
            .into_iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text),
                AnthropicContentBlock::Other => None,
            })
            .collect::<String>();

        Self {
            model: value.model,
            text,
            usage: AnthropicUsage {
                input_tokens: value.usage.input_tokens,
                output_tokens: value.usage.output_tokens,
            },
        }
    }
}
