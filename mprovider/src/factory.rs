//! Explicit, resettable provider cache.
//!
//! ```rust
//! use mprovider::{ProviderConfig, ProviderErrorKind, ProviderFactory};
//!
//! let factory = ProviderFactory::new(ProviderConfig::new().with_provider("gemini"));
//! let error = factory.get_provider().err().expect("gemini is not implemented");
//! assert_eq!(error.kind, ProviderErrorKind::Config);
//! assert_eq!(error.message, "AI provider 'gemini' is not yet implemented");
//! assert!(!factory.is_cached());
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{CompletionProvider, ProviderConfig, ProviderError, ProviderId};

#[cfg(feature = "provider-anthropic")]
use crate::adapters::anthropic::AnthropicTransport;

pub struct ProviderFactory {
    config: ProviderConfig,
    #[cfg(feature = "provider-anthropic")]
    anthropic_transport: Option<Arc<dyn AnthropicTransport>>,
    cached: Mutex<Option<Arc<dyn CompletionProvider>>>,
}

impl ProviderFactory {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            #[cfg(feature = "provider-anthropic")]
            anthropic_transport: None,
            cached: Mutex::new(None),
        }
    }

    /// Uses `transport` instead of building an HTTP client from the config.
    #[cfg(feature = "provider-anthropic")]
    pub fn with_anthropic_transport(mut self, transport: Arc<dyn AnthropicTransport>) -> Self {
        self.anthropic_transport = Some(transport);
        self
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Returns the cached provider, constructing it on first use.
    ///
    /// The lock is held across construction, so concurrent first calls build
    /// exactly one instance. Failed construction leaves the cache empty.
    pub fn get_provider(&self) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
        let mut cached = self.lock();
        if let Some(provider) = cached.as_ref() {
            return Ok(Arc::clone(provider));
        }

        let provider = self.build()?;
        *cached = Some(Arc::clone(&provider));
        Ok(provider)
    }

    /// Drops the cached instance; the next `get_provider` call rebuilds it.
    pub fn reset_provider(&self) {
        self.lock().take();
    }

    pub fn is_cached(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<dyn CompletionProvider>>> {
        self.cached
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn build(&self) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
        let provider_id = self.config.provider_name().parse::<ProviderId>()?;
        match provider_id {
            ProviderId::Anthropic => self.build_anthropic(),
            ProviderId::OpenAi | ProviderId::Gemini => Err(ProviderError::config(format!(
                "AI provider '{provider_id}' is not yet implemented"
            ))),
        }
    }

    #[cfg(feature = "provider-anthropic")]
    fn build_anthropic(&self) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
        use crate::adapters::anthropic::{AnthropicProvider, MISSING_API_KEY_MESSAGE};

        let api_key = self
            .config
            .anthropic_api_key
            .clone()
            .ok_or_else(|| ProviderError::config(MISSING_API_KEY_MESSAGE))?;

        let transport = match &self.anthropic_transport {
            Some(transport) => Arc::clone(transport),
            None => {
                let http = reqwest::Client::builder()
                    .timeout(self.config.timeout)
                    .build()
                    .map_err(|err| ProviderError::config(err.to_string()))?;
                let mut transport = AnthropicProvider::default_http_transport(http);
                if let Some(base_url) = &self.config.anthropic_base_url {
                    transport = transport.with_base_url(base_url.clone());
                }
                Arc::new(transport) as Arc<dyn AnthropicTransport>
            }
        };

        let mut provider = AnthropicProvider::new(api_key, transport)?;
        if let Some(model) = &self.config.anthropic_model {
            provider = provider.with_model(model.clone());
        }

        Ok(Arc::new(provider))
    }

    #[cfg(not(feature = "provider-anthropic"))]
    fn build_anthropic(&self) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
        Err(ProviderError::config(
            "provider-anthropic feature is not enabled on mprovider",
        ))
    }
}

impl std::fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderFactory")
            .field("config", &self.config)
            .field("cached", &self.is_cached())
            .finish()
    }
}
