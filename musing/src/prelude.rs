//! Common imports for most musing applications.

pub use crate::{
    assistant_message, build_runtime, build_runtime_from_env, build_runtime_with_factory,
    build_runtime_with_hooks, build_runtime_with_provider, parse_provider_id, total_token_usage,
    user_message,
};
pub use crate::{mu_msg, mu_transcript};
pub use crate::{
    ChatError, ChatErrorKind, CompletionProvider, ConversationEngine, ConversationTurnResult,
    Entry, Message, ProviderConfig, ProviderError, ProviderErrorKind, ProviderFactory, ProviderId,
    ReflectionRuntime, Role, SummaryEngine, SummaryGeneration, SummaryResult, TokenUsage,
    contains_crisis_language,
};
