//! Runtime wiring from configuration to ready-to-use engines.
//!
//! ```rust
//! use musing::{ProviderConfig, ProviderErrorKind, build_runtime};
//!
//! let error = build_runtime(ProviderConfig::new().with_provider("openai"))
//!     .err()
//!     .expect("openai is not implemented");
//! assert_eq!(error.kind, ProviderErrorKind::Config);
//! ```

use std::sync::Arc;

use mobserve::{SafeProviderHooks, SafeReflectionHooks, TracingObservabilityHooks};

use crate::{
    CompletionProvider, ConversationEngine, ProviderConfig, ProviderError, ProviderFactory,
    ProviderOperationHooks, ReflectionHooks, SummaryEngine,
};

#[derive(Clone)]
pub struct ReflectionRuntime {
    /// `None` when the runtime was built around an injected provider.
    pub factory: Option<Arc<ProviderFactory>>,
    pub conversation: ConversationEngine,
    pub summary: SummaryEngine,
}

impl ReflectionRuntime {
    pub fn provider(&self) -> &Arc<dyn CompletionProvider> {
        self.conversation.provider()
    }

    /// Resets the factory cache and rebuilds both engines on a fresh provider.
    ///
    /// A runtime built around an injected provider has nothing to reload and
    /// is left unchanged.
    pub fn reload_provider(&mut self) -> Result<(), ProviderError> {
        let Some(factory) = self.factory.clone() else {
            return Ok(());
        };

        factory.reset_provider();
        let provider = factory.get_provider()?;
        let (provider_hooks, reflection_hooks) = default_hooks();
        self.conversation = conversation_engine(
            Arc::clone(&provider),
            Arc::clone(&provider_hooks),
            Arc::clone(&reflection_hooks),
        );
        self.summary = summary_engine(provider, provider_hooks, reflection_hooks);
        Ok(())
    }
}

pub fn build_runtime(config: ProviderConfig) -> Result<ReflectionRuntime, ProviderError> {
    build_runtime_with_factory(ProviderFactory::new(config))
}

/// Reads [`ProviderConfig`] from the process environment.
pub fn build_runtime_from_env() -> Result<ReflectionRuntime, ProviderError> {
    build_runtime(ProviderConfig::from_env()?)
}

pub fn build_runtime_with_factory(
    factory: ProviderFactory,
) -> Result<ReflectionRuntime, ProviderError> {
    let factory = Arc::new(factory);
    let provider = factory.get_provider()?;
    let (provider_hooks, reflection_hooks) = default_hooks();

    Ok(ReflectionRuntime {
        factory: Some(factory),
        conversation: conversation_engine(
            Arc::clone(&provider),
            Arc::clone(&provider_hooks),
            Arc::clone(&reflection_hooks),
        ),
        summary: summary_engine(provider, provider_hooks, reflection_hooks),
    })
}

pub fn build_runtime_with_provider(provider: Arc<dyn CompletionProvider>) -> ReflectionRuntime {
    let (provider_hooks, reflection_hooks) = default_hooks();
    build_runtime_with_hooks(provider, provider_hooks, reflection_hooks)
}

pub fn build_runtime_with_hooks(
    provider: Arc<dyn CompletionProvider>,
    provider_hooks: Arc<dyn ProviderOperationHooks>,
    reflection_hooks: Arc<dyn ReflectionHooks>,
) -> ReflectionRuntime {
    ReflectionRuntime {
        factory: None,
        conversation: conversation_engine(
            Arc::clone(&provider),
            Arc::clone(&provider_hooks),
            Arc::clone(&reflection_hooks),
        ),
        summary: summary_engine(provider, provider_hooks, reflection_hooks),
    }
}

fn default_hooks() -> (Arc<dyn ProviderOperationHooks>, Arc<dyn ReflectionHooks>) {
    (
        Arc::new(SafeProviderHooks::new(TracingObservabilityHooks)),
        Arc::new(SafeReflectionHooks::new(TracingObservabilityHooks)),
    )
}

fn conversation_engine(
    provider: Arc<dyn CompletionProvider>,
    provider_hooks: Arc<dyn ProviderOperationHooks>,
    reflection_hooks: Arc<dyn ReflectionHooks>,
) -> ConversationEngine {
    ConversationEngine::new(provider)
        .with_provider_hooks(provider_hooks)
        .with_hooks(reflection_hooks)
}

fn summary_engine(
    provider: Arc<dyn CompletionProvider>,
    provider_hooks: Arc<dyn ProviderOperationHooks>,
    reflection_hooks: Arc<dyn ReflectionHooks>,
) -> SummaryEngine {
    SummaryEngine::new(provider)
        .with_provider_hooks(provider_hooks)
        .with_hooks(reflection_hooks)
}
