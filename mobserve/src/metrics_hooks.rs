//! Metrics-based observability hooks for provider calls and reflection turns.
//!
//! ```rust
//! use mobserve::MetricsObservabilityHooks;
//! use mprovider::ProviderOperationHooks;
//!
//! fn accepts_provider_hooks(_hooks: &dyn ProviderOperationHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_provider_hooks(&hooks);
//! ```

use std::time::Duration;

use mchat::{ChatError, ReflectionHooks, TurnKind};
use mprovider::{ProviderError, ProviderId, ProviderOperationHooks, TokenUsage};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ProviderOperationHooks for MetricsObservabilityHooks {
    fn on_call_start(&self, provider: ProviderId, operation: &str) {
        metrics::counter!(
            "musing_provider_call_start_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_success(
        &self,
        provider: ProviderId,
        operation: &str,
        usage: &TokenUsage,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "musing_provider_success_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .increment(1);
        metrics::counter!(
            "musing_provider_input_tokens_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .increment(u64::from(usage.input_tokens));
        metrics::counter!(
            "musing_provider_output_tokens_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .increment(u64::from(usage.output_tokens));
        metrics::histogram!(
            "musing_provider_call_duration_seconds",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "musing_provider_failure_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "error_code" => error.code()
        )
        .increment(1);
        metrics::histogram!(
            "musing_provider_call_duration_seconds",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .record(elapsed.as_secs_f64());
    }
}

impl ReflectionHooks for MetricsObservabilityHooks {
    fn on_turn_complete(&self, kind: TurnKind, is_done: bool, _usage: &TokenUsage) {
        metrics::counter!(
            "musing_conversation_turn_total",
            "turn" => kind.as_str(),
            "is_done" => is_done.to_string()
        )
        .increment(1);
    }

    fn on_turn_ceiling_reached(&self, _assistant_turns: usize) {
        metrics::counter!("musing_conversation_turn_ceiling_total").increment(1);
    }

    fn on_summary_generated(&self, score: u8, key_moments: usize, _usage: &TokenUsage) {
        metrics::counter!("musing_summary_generated_total").increment(1);
        metrics::histogram!("musing_summary_suggested_score").record(f64::from(score));
        metrics::histogram!("musing_summary_key_moments").record(key_moments as f64);
    }

    fn on_summary_rejected(&self, error: &ChatError) {
        metrics::counter!(
            "musing_summary_rejected_total",
            "error_code" => error.code()
        )
        .increment(1);
    }
}
