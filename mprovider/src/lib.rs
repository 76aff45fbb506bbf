//! Completion provider abstraction, Anthropic adapter and provider factory.
//!
//! ```rust
//! use mprovider::{ProviderConfig, ProviderErrorKind, ProviderFactory};
//!
//! let factory = ProviderFactory::new(ProviderConfig::new());
//! let error = factory.get_provider().err().expect("no credential configured");
//! assert_eq!(error.kind, ProviderErrorKind::Config);
//! assert_eq!(error.message, "ANTHROPIC_API_KEY is required");
//! ```

pub mod adapters;
mod config;
mod credentials;
mod error;
mod factory;
mod hooks;
mod model;
mod pricing;
mod provider;

pub mod prelude {
    pub use crate::{
        CompletionProvider, CompletionRequest, CompletionResponse, Message, ModelPricing,
        NoopOperationHooks, ProviderConfig, ProviderError, ProviderErrorKind, ProviderFactory,
        ProviderFuture, ProviderId, ProviderOperationHooks, Role, SecretString, TokenUsage,
        execute_observed,
    };
}

pub use config::{
    DEFAULT_PROVIDER, DEFAULT_TIMEOUT, ENV_ANTHROPIC_API_KEY, ENV_ANTHROPIC_BASE_URL,
    ENV_ANTHROPIC_MODEL, ENV_PROVIDER, ENV_TIMEOUT_SECS, ProviderConfig,
};
pub use credentials::SecretString;
pub use error::{ProviderError, ProviderErrorKind};
pub use factory::ProviderFactory;
pub use hooks::{NoopOperationHooks, ProviderOperationHooks, execute_observed};
pub use mcommon::BoxFuture;
pub use model::{CompletionRequest, CompletionResponse, Message, ProviderId, Role, TokenUsage};
pub use pricing::ModelPricing;
pub use provider::{CompletionProvider, ProviderFuture};
