use std::sync::{Arc, Mutex};
use std::time::Duration;

use mchat::{ChatError, ReflectionHooks, TurnKind};
use mprovider::{ProviderError, ProviderId, ProviderOperationHooks, TokenUsage};

use crate::{
    MetricsObservabilityHooks, SafeProviderHooks, SafeReflectionHooks, TracingObservabilityHooks,
};

fn exercise_provider_hooks(hooks: &dyn ProviderOperationHooks) {
    let provider_error = ProviderError::rate_limited("AI rate limit exceeded");

    hooks.on_call_start(ProviderId::Anthropic, "conversation");
    hooks.on_success(
        ProviderId::Anthropic,
        "conversation",
        &TokenUsage::new(120, 30),
        Duration::from_millis(15),
    );
    hooks.on_failure(
        ProviderId::Anthropic,
        "summary",
        &provider_error,
        Duration::from_millis(20),
    );
}

fn exercise_reflection_hooks(hooks: &dyn ReflectionHooks) {
    let chat_error = ChatError::parse("AI summary missing tldr");

    hooks.on_turn_complete(TurnKind::Start, false, &TokenUsage::new(100, 20));
    hooks.on_turn_complete(TurnKind::Continue, true, &TokenUsage::new(300, 40));
    hooks.on_turn_ceiling_reached(5);
    hooks.on_summary_generated(8, 3, &TokenUsage::new(900, 400));
    hooks.on_summary_rejected(&chat_error);
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    let hooks = TracingObservabilityHooks;
    exercise_provider_hooks(&hooks);
    exercise_reflection_hooks(&hooks);
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    let hooks = MetricsObservabilityHooks;
    exercise_provider_hooks(&hooks);
    exercise_reflection_hooks(&hooks);
}

#[derive(Default, Clone)]
struct RecordingProviderHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl ProviderOperationHooks for RecordingProviderHooks {
    fn on_call_start(&self, _provider: ProviderId, _operation: &str) {
        self.events.lock().expect("events lock").push("call_start");
    }

    fn on_success(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _usage: &TokenUsage,
        _elapsed: Duration,
    ) {
        self.events.lock().expect("events lock").push("success");
    }

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _error: &ProviderError,
        _elapsed: Duration,
    ) {
        self.events.lock().expect("events lock").push("failure");
    }
}

#[derive(Default, Clone)]
struct RecordingReflectionHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl ReflectionHooks for RecordingReflectionHooks {
    fn on_turn_complete(&self, _kind: TurnKind, _is_done: bool, _usage: &TokenUsage) {
        self.events.lock().expect("events lock").push("turn_complete");
    }

    fn on_turn_ceiling_reached(&self, _assistant_turns: usize) {
        self.events.lock().expect("events lock").push("ceiling");
    }

    fn on_summary_generated(&self, _score: u8, _key_moments: usize, _usage: &TokenUsage) {
        self.events.lock().expect("events lock").push("summary");
    }

    fn on_summary_rejected(&self, _error: &ChatError) {
        self.events.lock().expect("events lock").push("rejected");
    }
}

struct PanicProviderHooks;

impl ProviderOperationHooks for PanicProviderHooks {
    fn on_call_start(&self, _provider: ProviderId, _operation: &str) {
        panic!("call_start panic");
    }

    fn on_success(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _usage: &TokenUsage,
        _elapsed: Duration,
    ) {
        panic!("success panic");
    }

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _error: &ProviderError,
        _elapsed: Duration,
    ) {
        panic!("failure panic");
    }
}

struct PanicReflectionHooks;

impl ReflectionHooks for PanicReflectionHooks {
    fn on_turn_complete(&self, _kind: TurnKind, _is_done: bool, _usage: &TokenUsage) {
        panic!("turn panic");
    }

    fn on_turn_ceiling_reached(&self, _assistant_turns: usize) {
        panic!("ceiling panic");
    }

    fn on_summary_generated(&self, _score: u8, _key_moments: usize, _usage: &TokenUsage) {
        panic!("summary panic");
    }

    fn on_summary_rejected(&self, _error: &ChatError) {
        panic!("rejected panic");
    }
}

#[test]
fn safe_provider_hooks_forward_events() {
    let recording = RecordingProviderHooks::default();
    let hooks = SafeProviderHooks::new(recording.clone());
    exercise_provider_hooks(&hooks);

    let events = recording.events.lock().expect("events lock").clone();
    assert_eq!(events, vec!["call_start", "success", "failure"]);
}

#[test]
fn safe_reflection_hooks_forward_events() {
    let recording = RecordingReflectionHooks::default();
    let hooks = SafeReflectionHooks::new(recording.clone());
    exercise_reflection_hooks(&hooks);

    let events = recording.events.lock().expect("events lock").clone();
    assert_eq!(
        events,
        vec!["turn_complete", "turn_complete", "ceiling", "summary", "rejected"]
    );
}

#[test]
fn safe_hooks_swallow_panics() {
    exercise_provider_hooks(&SafeProviderHooks::new(PanicProviderHooks));
    exercise_reflection_hooks(&SafeReflectionHooks::new(PanicReflectionHooks));
}
