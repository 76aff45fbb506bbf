//! One-shot summarization of a finished reflection.
//!
//! ```rust
//! use mchat::{ChatErrorKind, parse_summary_response};
//!
//! let summary = parse_summary_response(
//!     r#"{"refined_entry":"I slept well.","key_moments":["rest"],"tldr":"Rested.",
//!        "ai_suggested_score":7.6,"score_justification":"Felt refreshed."}"#,
//! )
//! .expect("valid summary");
//! assert_eq!(summary.ai_suggested_score, 8);
//!
//! let err = parse_summary_response("```json\n{}\n```").expect_err("fenced reply");
//! assert_eq!(err.kind, ChatErrorKind::Parse);
//! ```

use std::sync::Arc;

use mcommon::{Entry, clamp_score};
use mprovider::{
    CompletionProvider, CompletionRequest, Message, NoopOperationHooks, ProviderOperationHooks,
    TokenUsage, execute_observed,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::prompt::{build_summary_system_prompt, build_summary_user_message};
use crate::{ChatError, NoopReflectionHooks, ReflectionHooks};

pub const SUMMARY_TEMPERATURE: f32 = 1.0;
pub const SUMMARY_MAX_TOKENS: u32 = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub refined_entry: String,
    pub key_moments: Vec<String>,
    pub tldr: String,
    /// Always within `SCORE_MIN..=SCORE_MAX`.
    pub ai_suggested_score: u8,
    pub score_justification: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryGeneration {
    pub summary: SummaryResult,
    pub token_usage: TokenUsage,
}

/// Validates a raw model reply into a [`SummaryResult`].
///
/// The reply must be a bare JSON object. Any failing field rejects the whole
/// reply; nothing is defaulted.
pub fn parse_summary_response(content: &str) -> Result<SummaryResult, ChatError> {
    let parsed = serde_json::from_str::<Value>(content)
        .map_err(|_| ChatError::parse("Failed to parse AI summary response as JSON"))?;

    let Value::Object(object) = parsed else {
        return Err(ChatError::parse("AI summary response is not a valid object"));
    };

    let refined_entry = required_string(&object, "refined_entry")?;
    let key_moments = object
        .get("key_moments")
        .and_then(Value::as_array)
        .ok_or_else(|| ChatError::parse("AI summary missing key_moments array"))?
        .iter()
        .map(key_moment_text)
        .collect::<Vec<_>>();
    let tldr = required_string(&object, "tldr")?;
    let score = object
        .get("ai_suggested_score")
        .and_then(Value::as_f64)
        .ok_or_else(|| ChatError::parse("AI summary missing ai_suggested_score"))?;
    let score_justification = required_string(&object, "score_justification")?;

    Ok(SummaryResult {
        refined_entry,
        key_moments,
        tldr,
        ai_suggested_score: clamp_score(score),
        score_justification,
    })
}

fn required_string(object: &Map<String, Value>, key: &str) -> Result<String, ChatError> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ChatError::parse(format!("AI summary missing {key}")))
}

/// Element types are not enforced; non-strings keep their compact JSON text.
fn key_moment_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[derive(Clone)]
pub struct SummaryEngine {
    provider: Arc<dyn CompletionProvider>,
    provider_hooks: Arc<dyn ProviderOperationHooks>,
    hooks: Arc<dyn ReflectionHooks>,
}

impl SummaryEngine {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            provider_hooks: Arc::new(NoopOperationHooks),
            hooks: Arc::new(NoopReflectionHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ReflectionHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_provider_hooks(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.provider_hooks = hooks;
        self
    }

    pub fn provider(&self) -> &Arc<dyn CompletionProvider> {
        &self.provider
    }

    pub async fn generate_summary(
        &self,
        raw_entry: &str,
        transcript: &[Message],
        recent_entries: &[Entry],
    ) -> Result<SummaryGeneration, ChatError> {
        let request = CompletionRequest::new(
            build_summary_system_prompt(recent_entries),
            vec![Message::user(build_summary_user_message(raw_entry, transcript))],
        )
        .with_temperature(SUMMARY_TEMPERATURE)
        .with_max_tokens(SUMMARY_MAX_TOKENS);

        let response = execute_observed(
            self.provider.id(),
            "summary",
            self.provider_hooks.as_ref(),
            self.provider.complete(request),
        )
        .await?;

        let summary = match parse_summary_response(&response.content) {
            Ok(summary) => summary,
            Err(error) => {
                self.hooks.on_summary_rejected(&error);
                return Err(error);
            }
        };

        self.hooks.on_summary_generated(
            summary.ai_suggested_score,
            summary.key_moments.len(),
            &response.token_usage,
        );

        Ok(SummaryGeneration {
            summary,
            token_usage: response.token_usage,
        })
    }

    /// Sum of the provider's estimate for each usage. No network access.
    pub fn estimate_total_cost(
        &self,
        conversation_usage: &TokenUsage,
        summary_usage: &TokenUsage,
    ) -> f64 {
        self.provider.estimate_cost(conversation_usage) + self.provider.estimate_cost(summary_usage)
    }
}
