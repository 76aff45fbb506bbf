//! Lifecycle callbacks for reflection turns and summaries.
//!
//! Hooks receive counts, flags and usage only; entry text and user replies
//! are never passed through them.

use mprovider::TokenUsage;

use crate::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnKind {
    Start,
    Continue,
}

impl TurnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Continue => "continue",
        }
    }
}

pub trait ReflectionHooks: Send + Sync {
    fn on_turn_complete(&self, _kind: TurnKind, _is_done: bool, _usage: &TokenUsage) {}

    /// Called instead of `on_turn_complete` when the turn ceiling short-circuits
    /// a continue call.
    fn on_turn_ceiling_reached(&self, _assistant_turns: usize) {}

    fn on_summary_generated(&self, _score: u8, _key_moments: usize, _usage: &TokenUsage) {}

    fn on_summary_rejected(&self, _error: &ChatError) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReflectionHooks;

impl ReflectionHooks for NoopReflectionHooks {}
