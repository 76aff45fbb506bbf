//! Turn-limited reflection dialogue.
//!
//! The engine holds no conversation state: callers pass the transcript so far
//! on every call and persist whatever comes back.

use std::sync::Arc;

use mcommon::Entry;
use mprovider::{
    CompletionProvider, CompletionRequest, Message, NoopOperationHooks, ProviderOperationHooks,
    Role, TokenUsage, execute_observed,
};
use serde::{Deserialize, Serialize};

use crate::prompt::{DONE_SIGNAL, build_conversation_system_prompt};
use crate::{ChatError, NoopReflectionHooks, ReflectionHooks, TurnKind};

/// Assistant replies allowed before the engine wraps up on its own.
pub const MAX_CONVERSATION_TURNS: usize = 5;
pub const CONVERSATION_TEMPERATURE: f32 = 0.7;
pub const CONVERSATION_MAX_TOKENS: u32 = 1024;

pub const WRAP_UP_MESSAGE: &str =
    "Thank you for sharing today's reflections. Let me put together a summary for you.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurnResult {
    /// Model reply with the done signal removed and surrounding whitespace trimmed.
    pub message: String,
    pub is_done: bool,
    pub token_usage: TokenUsage,
}

pub fn count_assistant_turns(history: &[Message]) -> usize {
    history
        .iter()
        .filter(|message| message.role == Role::Assistant)
        .count()
}

pub fn turns_remaining(history: &[Message]) -> usize {
    MAX_CONVERSATION_TURNS.saturating_sub(count_assistant_turns(history))
}

/// Removes every occurrence of [`DONE_SIGNAL`] and trims the result once.
///
/// Matching is a plain case-sensitive substring search, so a reply that merely
/// quotes the signal still counts as done.
pub fn strip_done_signal(content: &str) -> (String, bool) {
    let is_done = content.contains(DONE_SIGNAL);
    let message = if is_done {
        content.replace(DONE_SIGNAL, "").trim().to_string()
    } else {
        content.trim().to_string()
    };

    (message, is_done)
}

#[derive(Clone)]
pub struct ConversationEngine {
    provider: Arc<dyn CompletionProvider>,
    provider_hooks: Arc<dyn ProviderOperationHooks>,
    hooks: Arc<dyn ReflectionHooks>,
}

impl ConversationEngine {
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

    /// Opens the dialogue with the raw entry as the only message.
    pub async fn start_conversation(
        &self,
        raw_entry: &str,
        recent_entries: &[Entry],
    ) -> Result<ConversationTurnResult, ChatError> {
        let messages = vec![Message::user(raw_entry)];
        self.run_turn(TurnKind::Start, messages, recent_entries).await
    }

    /// Sends `[raw_entry, ..history, user_reply]`, unless the history already
    /// holds [`MAX_CONVERSATION_TURNS`] assistant replies, in which case the
    /// fixed wrap-up message is returned without contacting the provider.
    pub async fn continue_conversation(
        &self,
        raw_entry: &str,
        history: &[Message],
        user_reply: &str,
        recent_entries: &[Entry],
    ) -> Result<ConversationTurnResult, ChatError> {
        let assistant_turns = count_assistant_turns(history);
        if assistant_turns >= MAX_CONVERSATION_TURNS {
            self.hooks.on_turn_ceiling_reached(assistant_turns);
            return Ok(ConversationTurnResult {
                message: WRAP_UP_MESSAGE.to_string(),
                is_done: true,
                token_usage: TokenUsage::zero(),
            });
        }

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::user(raw_entry));
        messages.extend_from_slice(history);
        messages.push(Message::user(user_reply));

        self.run_turn(TurnKind::Continue, messages, recent_entries).await
    }

    async fn run_turn(
        &self,
        kind: TurnKind,
        messages: Vec<Message>,
        recent_entries: &[Entry],
    ) -> Result<ConversationTurnResult, ChatError> {
        let system_prompt = build_conversation_system_prompt(recent_entries);
        let request = CompletionRequest::new(system_prompt, messages)
            .with_temperature(CONVERSATION_TEMPERATURE)
            .with_max_tokens(CONVERSATION_MAX_TOKENS);

        let response = execute_observed(
            self.provider.id(),
            "conversation",
            self.provider_hooks.as_ref(),
            self.provider.complete(request),
        )
        .await?;

        let (message, is_done) = strip_done_signal(&response.content);
        self.hooks.on_turn_complete(kind, is_done, &response.token_usage);

        Ok(ConversationTurnResult {
            message,
            is_done,
            token_usage: response.token_usage,
        })
    }
}
