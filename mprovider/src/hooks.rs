//! Operational hook contracts around single provider calls.
//!
//! A failed call is reported once and returned to the caller; nothing retries.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::{CompletionResponse, ProviderError, ProviderId, TokenUsage};

pub trait ProviderOperationHooks: Send + Sync {
    fn on_call_start(&self, _provider: ProviderId, _operation: &str) {}

    fn on_success(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _usage: &TokenUsage,
        _elapsed: Duration,
    ) {
    }

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _error: &ProviderError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOperationHooks;

impl ProviderOperationHooks for NoopOperationHooks {}

/// Runs one provider call and reports its outcome to `hooks`.
pub async fn execute_observed<Fut>(
    provider: ProviderId,
    operation: &str,
    hooks: &dyn ProviderOperationHooks,
    call: Fut,
) -> Result<CompletionResponse, ProviderError>
where
    Fut: Future<Output = Result<CompletionResponse, ProviderError>>,
{
    hooks.on_call_start(provider, operation);
    let started = Instant::now();

    match call.await {
        Ok(response) => {
            hooks.on_success(provider, operation, &response.token_usage, started.elapsed());
            Ok(response)
        }
        Err(error) => {
            hooks.on_failure(provider, operation, &error, started.elapsed());
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::ProviderErrorKind;

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl ProviderOperationHooks for RecordingHooks {
        fn on_call_start(&self, provider: ProviderId, operation: &str) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("start:{provider}:{operation}"));
        }

        fn on_success(
            &self,
            provider: ProviderId,
            operation: &str,
            usage: &TokenUsage,
            _elapsed: Duration,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("success:{provider}:{operation}:{}", usage.total_tokens));
        }

        fn on_failure(
            &self,
            provider: ProviderId,
            operation: &str,
            error: &ProviderError,
            _elapsed: Duration,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{provider}:{operation}:{:?}", error.kind));
        }
    }

    #[tokio::test]
    async fn execute_observed_reports_success_with_usage() {
        let hooks = RecordingHooks::default();
        let response = execute_observed(ProviderId::Anthropic, "conversation", &hooks, async {
            Ok(CompletionResponse {
                content: "hello".to_string(),
                token_usage: TokenUsage::new(4, 3),
                model: "test-model".to_string(),
            })
        })
        .await
        .expect("call should succeed");

        assert_eq!(response.content, "hello");
        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(
            events,
            vec![
                "start:anthropic:conversation".to_string(),
                "success:anthropic:conversation:7".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn execute_observed_reports_failure_once_and_returns_error() {
        let hooks = RecordingHooks::default();
        let error = execute_observed(ProviderId::Anthropic, "summary", &hooks, async {
            Err(ProviderError::rate_limited("AI rate limit exceeded"))
        })
        .await
        .expect_err("call should fail");

        assert_eq!(error.kind, ProviderErrorKind::RateLimited);
        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], "failure:anthropic:summary:RateLimited");
    }
}
