//! Reflection-layer errors and classification.
//!
//! ```rust
//! use mchat::{ChatError, ChatErrorKind};
//! use mprovider::ProviderError;
//!
//! let err = ChatError::from(ProviderError::rate_limited("AI rate limit exceeded"));
//! assert_eq!(err.kind, ChatErrorKind::RateLimited);
//! assert_eq!(err.status_code(), 429);
//! assert!(err.is_retryable());
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use mprovider::{ProviderError, ProviderErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatErrorKind {
    Config,
    RateLimited,
    AuthFailed,
    Provider,
    /// The summary reply failed structural or type validation.
    Parse,
}

impl ChatErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Config => "AI_CONFIG_ERROR",
            Self::RateLimited => "AI_RATE_LIMIT",
            Self::AuthFailed => "AI_AUTH_ERROR",
            Self::Provider => "AI_PROVIDER_ERROR",
            Self::Parse => "AI_PARSE_ERROR",
        }
    }

    pub fn status_code(self) -> u16 {
        match self {
            Self::Config | Self::AuthFailed => 500,
            Self::RateLimited => 429,
            Self::Provider | Self::Parse => 502,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Parse, message)
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Informational only; nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        self.kind == ChatErrorKind::RateLimited
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ChatError {}

impl From<ProviderError> for ChatError {
    fn from(value: ProviderError) -> Self {
        let kind = match value.kind {
            ProviderErrorKind::Config => ChatErrorKind::Config,
            ProviderErrorKind::RateLimited => ChatErrorKind::RateLimited,
            ProviderErrorKind::AuthFailed => ChatErrorKind::AuthFailed,
            ProviderErrorKind::Upstream => ChatErrorKind::Provider,
        };

        ChatError::new(kind, value.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_keep_kind_and_message() {
        let cases = [
            (ProviderError::config("cfg"), ChatErrorKind::Config),
            (ProviderError::rate_limited("rl"), ChatErrorKind::RateLimited),
            (ProviderError::auth_failed("auth"), ChatErrorKind::AuthFailed),
            (ProviderError::upstream("up"), ChatErrorKind::Provider),
        ];

        for (provider_error, kind) in cases {
            let message = provider_error.message.clone();
            let code = provider_error.code();
            let status = provider_error.status_code();
            let chat_error = ChatError::from(provider_error);
            assert_eq!(chat_error.kind, kind);
            assert_eq!(chat_error.message, message);
            assert_eq!(chat_error.code(), code);
            assert_eq!(chat_error.status_code(), status);
        }
    }

    #[test]
    fn parse_errors_are_bad_gateway() {
        let err = ChatError::parse("AI summary missing tldr");
        assert_eq!(err.code(), "AI_PARSE_ERROR");
        assert_eq!(err.status_code(), 502);
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Parse: AI summary missing tldr");
    }
}
