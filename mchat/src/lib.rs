//! Reflection conversation and summarization over a completion provider.
//!
//! ```rust
//! use mchat::{MAX_CONVERSATION_TURNS, turns_remaining};
//! use mprovider::Message;
//!
//! let history = vec![Message::assistant("How was your day?"), Message::user("Fine")];
//! assert_eq!(turns_remaining(&history), MAX_CONVERSATION_TURNS - 1);
//! ```

mod conversation;
mod error;
mod hooks;
pub mod prompt;
pub mod safety;
mod summary;

pub mod prelude {
    pub use crate::{
        ChatError, ChatErrorKind, ConversationEngine, ConversationTurnResult,
        NoopReflectionHooks, ReflectionHooks, SummaryEngine, SummaryGeneration, SummaryResult,
        TurnKind,
    };
    pub use mcommon::Entry;
    pub use mprovider::{CompletionProvider, Message, Role, TokenUsage};
}

pub use conversation::{
    CONVERSATION_MAX_TOKENS, CONVERSATION_TEMPERATURE, ConversationEngine,
    ConversationTurnResult, MAX_CONVERSATION_TURNS, WRAP_UP_MESSAGE, count_assistant_turns,
    strip_done_signal, turns_remaining,
};
pub use error::{ChatError, ChatErrorKind};
pub use hooks::{NoopReflectionHooks, ReflectionHooks, TurnKind};
pub use mcommon::Entry;
pub use prompt::DONE_SIGNAL;
pub use summary::{
    SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE, SummaryEngine, SummaryGeneration, SummaryResult,
    parse_summary_response,
};
