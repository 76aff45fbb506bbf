//! Provider configuration, loaded from the process environment or built by hand.
//!
//! ```rust
//! use std::time::Duration;
//! use mprovider::ProviderConfig;
//!
//! let config = ProviderConfig::from_lookup(|name| match name {
//!     "ANTHROPIC_API_KEY" => Some("sk-ant-123".to_string()),
//!     "AI_PROVIDER_TIMEOUT_SECS" => Some("30".to_string()),
//!     _ => None,
//! })
//! .expect("valid config");
//!
//! assert_eq!(config.provider_name(), "anthropic");
//! assert_eq!(config.timeout, Duration::from_secs(30));
//! ```

use std::time::Duration;

use crate::{ProviderError, SecretString};

pub const DEFAULT_PROVIDER: &str = "anthropic";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

pub const ENV_PROVIDER: &str = "AI_PROVIDER";
pub const ENV_ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_ANTHROPIC_MODEL: &str = "ANTHROPIC_MODEL";
pub const ENV_ANTHROPIC_BASE_URL: &str = "ANTHROPIC_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "AI_PROVIDER_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Raw provider identifier; resolved by the factory so that unknown names
    /// fail at selection time.
    pub provider: Option<String>,
    pub anthropic_api_key: Option<SecretString>,
    pub anthropic_model: Option<String>,
    pub anthropic_base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: None,
            anthropic_api_key: None,
            anthropic_model: None,
            anthropic_base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProviderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the default provider with a credential.
    pub fn anthropic(api_key: impl Into<SecretString>) -> Self {
        Self::default().with_anthropic_api_key(api_key)
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let timeout = match read(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let seconds = raw.parse::<u64>().map_err(|_| {
                    ProviderError::config(format!(
                        "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                Duration::from_secs(seconds)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            provider: read(ENV_PROVIDER),
            anthropic_api_key: read(ENV_ANTHROPIC_API_KEY).map(SecretString::new),
            anthropic_model: read(ENV_ANTHROPIC_MODEL),
            anthropic_base_url: read(ENV_ANTHROPIC_BASE_URL),
            timeout,
        })
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_anthropic_api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.anthropic_api_key = Some(api_key.into());
        self
    }

    pub fn with_anthropic_model(mut self, model: impl Into<String>) -> Self {
        self.anthropic_model = Some(model.into());
        self
    }

    pub fn with_anthropic_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.anthropic_base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.as_deref().unwrap_or(DEFAULT_PROVIDER)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::ProviderErrorKind;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ProviderConfig::from_lookup(|_| None).expect("config");
        assert_eq!(config.provider_name(), DEFAULT_PROVIDER);
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            ("AI_PROVIDER", "  "),
            ("ANTHROPIC_API_KEY", ""),
        ]))
        .expect("config");
        assert!(config.provider.is_none());
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn reads_every_known_variable() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            ("AI_PROVIDER", "openai"),
            ("ANTHROPIC_API_KEY", " sk-ant-1 "),
            ("ANTHROPIC_MODEL", "claude-x"),
            ("ANTHROPIC_BASE_URL", "http://localhost:9000/v1"),
            ("AI_PROVIDER_TIMEOUT_SECS", "5"),
        ]))
        .expect("config");

        assert_eq!(config.provider_name(), "openai");
        assert_eq!(
            config.anthropic_api_key.as_ref().map(SecretString::expose),
            Some("sk-ant-1")
        );
        assert_eq!(config.anthropic_model.as_deref(), Some("claude-x"));
        assert_eq!(
            config.anthropic_base_url.as_deref(),
            Some("http://localhost:9000/v1")
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn non_numeric_timeout_is_config_error() {
        let error =
            ProviderConfig::from_lookup(lookup_from(&[("AI_PROVIDER_TIMEOUT_SECS", "soon")]))
                .expect_err("bad timeout");
        assert_eq!(error.kind, ProviderErrorKind::Config);
        assert!(error.message.contains("AI_PROVIDER_TIMEOUT_SECS"));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = ProviderConfig::anthropic("sk-ant-hidden");
        assert!(!format!("{config:?}").contains("sk-ant-hidden"));
    }
}
