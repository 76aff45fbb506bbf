use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use mchat::{ChatError, ReflectionHooks, TurnKind};
use mprovider::{ProviderError, ProviderId, ProviderOperationHooks, TokenUsage};

pub struct SafeProviderHooks<H> {
    inner: H,
}

impl<H> SafeProviderHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ProviderOperationHooks for SafeProviderHooks<H>
where
    H: ProviderOperationHooks,
{
    fn on_call_start(&self, provider: ProviderId, operation: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_call_start(provider, operation)
        }));
    }

    fn on_success(
        &self,
        provider: ProviderId,
        operation: &str,
        usage: &TokenUsage,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_success(provider, operation, usage, elapsed)
        }));
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(provider, operation, error, elapsed)
        }));
    }
}

pub struct SafeReflectionHooks<H> {
    inner: H,
}

impl<H> SafeReflectionHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ReflectionHooks for SafeReflectionHooks<H>
where
    H: ReflectionHooks,
{
    fn on_turn_complete(&self, kind: TurnKind, is_done: bool, usage: &TokenUsage) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_turn_complete(kind, is_done, usage)
        }));
    }

    fn on_turn_ceiling_reached(&self, assistant_turns: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_turn_ceiling_reached(assistant_turns)
        }));
    }

    fn on_summary_generated(&self, score: u8, key_moments: usize, usage: &TokenUsage) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_summary_generated(score, key_moments, usage)
        }));
    }

    fn on_summary_rejected(&self, error: &ChatError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_summary_rejected(error)
        }));
    }
}
