use mcommon::BoxFuture;

use crate::{CompletionRequest, CompletionResponse, ProviderError, ProviderId, TokenUsage};

pub type ProviderFuture<'a, T> = BoxFuture<'a, T>;

/// A remote completion backend.
///
/// `complete` performs exactly one round trip and never returns partial
/// content. `estimate_cost` is pure and must not touch the network.
pub trait CompletionProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    fn complete<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, Result<CompletionResponse, ProviderError>>;

    fn estimate_cost(&self, usage: &TokenUsage) -> f64;
}

#[cfg(test)]
mod tests {
    use mcommon::BoxFuture;

    use super::ProviderFuture;

    fn text_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
        Box::pin(async move { value.len() })
    }

    #[tokio::test]
    async fn provider_future_is_the_shared_boxed_future() {
        let future: ProviderFuture<'_, usize> = text_len("hello");
        assert_eq!(future.await, 5);
    }
}
