//! Anthropic adapter types and the vendor error enum.

use std::fmt::{Display, Formatter};

use crate::{Message, Role, TokenUsage};

#[derive(Debug, Clone, PartialEq)]
pub struct AnthropicRequest {
    pub model: String,
    pub system: String,
    pub messages: Vec<AnthropicMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnthropicMessage {
    pub role: AnthropicRole,
    pub content: String,
}

impl From<Message> for AnthropicMessage {
    fn from(value: Message) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

/// The Messages API only accepts these two roles; the system prompt travels
/// in its own request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnthropicRole {
    User,
    Assistant,
}

impl AnthropicRole {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl From<Role> for AnthropicRole {
    fn from(value: Role) -> Self {
        match value {
            Role::User => Self::User,
            Role::Assistant => Self::Assistant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnthropicResponse {
    pub model: String,
    /// All text blocks of the reply, concatenated in order.
    pub text: String,
    pub usage: AnthropicUsage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnthropicUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl From<AnthropicUsage> for TokenUsage {
    fn from(value: AnthropicUsage) -> Self {
        TokenUsage::new(value.input_tokens, value.output_tokens)
    }
}

/// Failures produced at the Anthropic transport boundary.
///
/// This type never leaves the adapter; the provider translates it into a
/// [`crate::ProviderError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnthropicApiError {
    RateLimit { message: String },
    Authentication { message: String },
    Api { status: u16, message: String },
    Connection(String),
    Decode(String),
}

impl Display for AnthropicApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateLimit { message } => write!(f, "rate limited: {message}"),
            Self::Authentication { message } => write!(f, "authentication failed: {message}"),
            Self::Api { status, message } => write!(f, "api error {status}: {message}"),
            Self::Connection(message) => write!(f, "connection failed: {message}"),
            Self::Decode(message) => write!(f, "invalid response body: {message}"),
        }
    }
}

impl std::error::Error for AnthropicApiError {}
