//! Small convenience constructors for common types.

use crate::{ConversationTurnResult, Message, ProviderId, Role, TokenUsage};

pub fn user_message(content: impl Into<String>) -> Message {
    Message::new(Role::User, content)
}

pub fn assistant_message(content: impl Into<String>) -> Message {
    Message::new(Role::Assistant, content)
}

/// Accepts exactly the identifiers [`crate::ProviderFactory`] resolves.
pub fn parse_provider_id(value: &str) -> Option<ProviderId> {
    value.parse::<ProviderId>().ok()
}

/// Total usage across conversation turns and an optional summary call.
pub fn total_token_usage<'a>(
    turns: impl IntoIterator<Item = &'a ConversationTurnResult>,
    summary: Option<&TokenUsage>,
) -> TokenUsage {
    let conversation = turns
        .into_iter()
        .map(|turn| turn.token_usage)
        .sum::<TokenUsage>();
    conversation + summary.copied().unwrap_or_default()
}
