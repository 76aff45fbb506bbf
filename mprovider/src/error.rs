//! Shared provider error kinds and error value helpers.
//!
//! ```rust
//! use mprovider::ProviderError;
//!
//! let auth = ProviderError::auth_failed("AI authentication failed");
//! assert!(!auth.retryable);
//! assert_eq!(auth.code(), "AI_AUTH_ERROR");
//!
//! let throttled = ProviderError::rate_limited("AI rate limit exceeded");
//! assert!(throttled.retryable);
//! assert_eq!(throttled.status_code(), 429);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    /// Missing credential or unknown/unimplemented provider identifier.
    Config,
    RateLimited,
    AuthFailed,
    /// Any other upstream failure, including network and decode failures.
    Upstream,
}

impl ProviderErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Config => "AI_CONFIG_ERROR",
            Self::RateLimited => "AI_RATE_LIMIT",
            Self::AuthFailed => "AI_AUTH_ERROR",
            Self::Upstream => "AI_PROVIDER_ERROR",
        }
    }

    /// Auth failures are a server-side credential problem, not a client error.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Config | Self::AuthFailed => 500,
            Self::RateLimited => 429,
            Self::Upstream => 502,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Config, message, false)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::RateLimited, message, true)
    }

    pub fn auth_failed(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::AuthFailed, message, false)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Upstream, message, false)
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_builders_assign_expected_kinds_and_retryability() {
        let config = ProviderError::config("ANTHROPIC_API_KEY is required");
        assert_eq!(config.kind, ProviderErrorKind::Config);
        assert!(!config.retryable);

        let rate_limited = ProviderError::rate_limited("slow down");
        assert_eq!(rate_limited.kind, ProviderErrorKind::RateLimited);
        assert!(rate_limited.retryable);

        let upstream = ProviderError::upstream("boom");
        assert_eq!(upstream.kind, ProviderErrorKind::Upstream);
        assert!(!upstream.retryable);
    }

    #[test]
    fn codes_and_status_codes_are_stable() {
        assert_eq!(ProviderErrorKind::Config.code(), "AI_CONFIG_ERROR");
        assert_eq!(ProviderErrorKind::RateLimited.status_code(), 429);
        assert_eq!(ProviderErrorKind::AuthFailed.status_code(), 500);
        assert_eq!(ProviderErrorKind::Upstream.code(), "AI_PROVIDER_ERROR");
        assert_eq!(ProviderErrorKind::Upstream.status_code(), 502);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = ProviderError::auth_failed("AI authentication failed");
        assert_eq!(err.to_string(), "AuthFailed: AI authentication failed");
    }
}
