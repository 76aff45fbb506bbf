//! Unified facade over the musing workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the core musing crates, wires default observability, and
//! provides small helpers and macros for building transcripts.

mod macros;

pub mod prelude;
pub mod runtime;
pub mod util;

pub use mchat;
pub use mcommon;
pub use mobserve;
pub use mprovider;

pub use mchat::safety::{
    CRISIS_KEYWORDS, CRISIS_RESOURCES, CrisisResource, contains_crisis_language,
};
pub use mchat::{
    CONVERSATION_MAX_TOKENS, CONVERSATION_TEMPERATURE, ChatError, ChatErrorKind,
    ConversationEngine, ConversationTurnResult, DONE_SIGNAL, MAX_CONVERSATION_TURNS,
    NoopReflectionHooks, ReflectionHooks, SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE, SummaryEngine,
    SummaryGeneration, SummaryResult, TurnKind, WRAP_UP_MESSAGE, count_assistant_turns,
    parse_summary_response, turns_remaining,
};
pub use mcommon::{BoxFuture, CONTEXT_DAYS, Entry, SCORE_MAX, SCORE_MIN, clamp_score, score_label};
pub use mobserve::{
    MetricsObservabilityHooks, SafeProviderHooks, SafeReflectionHooks, TracingObservabilityHooks,
};
pub use mprovider::{
    CompletionProvider, CompletionRequest, CompletionResponse, Message, ModelPricing,
    NoopOperationHooks, ProviderConfig, ProviderError, ProviderErrorKind, ProviderFactory,
    ProviderFuture, ProviderId, ProviderOperationHooks, Role, SecretString, TokenUsage,
};

pub use runtime::{
    ReflectionRuntime, build_runtime, build_runtime_from_env, build_runtime_with_factory,
    build_runtime_with_hooks, build_runtime_with_provider,
};
pub use util::{assistant_message, parse_provider_id, total_token_usage, user_message};
