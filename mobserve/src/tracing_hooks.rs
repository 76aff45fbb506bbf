//! Tracing-based observability hooks for provider calls and reflection turns.
//!
//! ```rust
//! use mchat::ReflectionHooks;
//! use mobserve::TracingObservabilityHooks;
//!
//! fn accepts_reflection_hooks(_hooks: &dyn ReflectionHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_reflection_hooks(&hooks);
//! ```

use std::time::Duration;

use mchat::{ChatError, ReflectionHooks, TurnKind};
use mprovider::{ProviderError, ProviderId, ProviderOperationHooks, TokenUsage};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ProviderOperationHooks for TracingObservabilityHooks {
    fn on_call_start(&self, provider: ProviderId, operation: &str) {
        tracing::info!(
            phase = "provider",
            event = "call_start",
            provider = %provider,
            operation
        );
    }

    fn on_success(
        &self,
        provider: ProviderId,
        operation: &str,
        usage: &TokenUsage,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "provider",
            event = "success",
            provider = %provider,
            operation,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "provider",
            event = "failure",
            provider = %provider,
            operation,
            error_kind = ?error.kind,
            error_code = error.code(),
            retryable = error.retryable,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }
}

impl ReflectionHooks for TracingObservabilityHooks {
    fn on_turn_complete(&self, kind: TurnKind, is_done: bool, usage: &TokenUsage) {
        tracing::info!(
            phase = "conversation",
            event = "turn_complete",
            turn = kind.as_str(),
            is_done,
            total_tokens = usage.total_tokens
        );
    }

    fn on_turn_ceiling_reached(&self, assistant_turns: usize) {
        tracing::info!(
            phase = "conversation",
            event = "turn_ceiling_reached",
            assistant_turns
        );
    }

    fn on_summary_generated(&self, score: u8, key_moments: usize, usage: &TokenUsage) {
        tracing::info!(
            phase = "summary",
            event = "generated",
            score,
            key_moments,
            total_tokens = usage.total_tokens
        );
    }

    fn on_summary_rejected(&self, error: &ChatError) {
        tracing::warn!(
            phase = "summary",
            event = "rejected",
            error_kind = ?error.kind,
            error_code = error.code(),
            error = %error
        );
    }
}
