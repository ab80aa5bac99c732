use std::sync::{Arc, Mutex};
use std::time::Duration;

use fbchat::{ChatError, ChatResponse, ChatRuntimeHooks};
use fbcommon::TraceId;
use fbprovider::{
    CredentialPool, ModelPool, ProviderError, ProviderId, ProviderOperationHooks, RotationSlot,
    Rotator, ToolCall, execute_with_rotation,
};

use crate::{
    MetricsObservabilityHooks, SafeChatHooks, SafeProviderHooks, TracingObservabilityHooks,
};

fn sample_slot() -> RotationSlot {
    Rotator::new(CredentialPool::parse("key-a"), ModelPool::default())
        .next()
        .expect("pool has a slot")
}

fn sample_tool_call() -> ToolCall {
    ToolCall::new(
        "call_0",
        "searchFlipbazzarInventory",
        "{\"category\":\"audio\"}",
    )
}

fn exercise_provider_hooks(hooks: &dyn ProviderOperationHooks) {
    let slot = sample_slot();
    let error = ProviderError::rate_limited("quota").with_status(429);

    hooks.on_attempt_start(ProviderId::Gemini, "initial_call", 1, &slot);
    hooks.on_rotation(ProviderId::Gemini, "initial_call", 1, &slot, &error);
    hooks.on_success(ProviderId::Gemini, "initial_call", 2);
    hooks.on_failure(ProviderId::Gemini, "tool_followup", 4, &error);
}

fn exercise_chat_hooks(hooks: &dyn ChatRuntimeHooks) {
    let trace_id = TraceId::from("turn-1");

    hooks.on_turn_start(&trace_id, 2);
    hooks.on_tool_call(&trace_id, &sample_tool_call());
    hooks.on_turn_complete(
        &trace_id,
        &ChatResponse::with_products("found", Vec::new()),
        Duration::from_millis(20),
    );
    hooks.on_turn_failure(
        &trace_id,
        &ChatError::configuration("no keys"),
        Duration::from_millis(5),
    );
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    exercise_provider_hooks(&TracingObservabilityHooks);
    exercise_chat_hooks(&TracingObservabilityHooks);
}

#[test]
fn tool_call_logging_keeps_argument_names_not_values() {
    let keys =
        crate::tracing_hooks::argument_keys(r#"{"query":"gift for my wife","maxPrice":300}"#);
    assert_eq!(keys, vec!["maxPrice".to_string(), "query".to_string()]);

    assert!(crate::tracing_hooks::argument_keys("not json").is_empty());
    assert!(crate::tracing_hooks::argument_keys("[1,2]").is_empty());
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    exercise_provider_hooks(&MetricsObservabilityHooks);
    exercise_chat_hooks(&MetricsObservabilityHooks);
    MetricsObservabilityHooks.on_turn_complete(
        &TraceId::from("turn-2"),
        &ChatResponse::text("hello"),
        Duration::from_millis(1),
    );
}

#[derive(Default, Clone)]
struct RecordingProviderHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl ProviderOperationHooks for RecordingProviderHooks {
    fn on_attempt_start(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempt: u32,
        _slot: &RotationSlot,
    ) {
        self.events
            .lock()
            .expect("events lock")
            .push("attempt_start");
    }

    fn on_rotation(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempt: u32,
        _slot: &RotationSlot,
        _error: &ProviderError,
    ) {
        self.events.lock().expect("events lock").push("rotation");
    }

    fn on_success(&self, _provider: ProviderId, _operation: &str, _attempts: u32) {
        self.events.lock().expect("events lock").push("success");
    }

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempts: u32,
        _error: &ProviderError,
    ) {
        self.events.lock().expect("events lock").push("failure");
    }
}

#[derive(Default, Clone)]
struct RecordingChatHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl ChatRuntimeHooks for RecordingChatHooks {
    fn on_turn_start(&self, _trace_id: &TraceId, _history_len: usize) {
        self.events.lock().expect("events lock").push("start");
    }

    fn on_tool_call(&self, _trace_id: &TraceId, _call: &ToolCall) {
        self.events.lock().expect("events lock").push("tool_call");
    }

    fn on_turn_complete(&self, _trace_id: &TraceId, _response: &ChatResponse, _elapsed: Duration) {
        self.events.lock().expect("events lock").push("complete");
    }

    fn on_turn_failure(&self, _trace_id: &TraceId, _error: &ChatError, _elapsed: Duration) {
        self.events.lock().expect("events lock").push("failure");
    }
}

struct PanicProviderHooks;

impl ProviderOperationHooks for PanicProviderHooks {
    fn on_attempt_start(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempt: u32,
        _slot: &RotationSlot,
    ) {
        panic!("attempt_start panic");
    }

    fn on_rotation(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempt: u32,
        _slot: &RotationSlot,
        _error: &ProviderError,
    ) {
        panic!("rotation panic");
    }

    fn on_success(&self, _provider: ProviderId, _operation: &str, _attempts: u32) {
        panic!("success panic");
    }

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempts: u32,
        _error: &ProviderError,
    ) {
        panic!("failure panic");
    }
}

struct PanicChatHooks;

impl ChatRuntimeHooks for PanicChatHooks {
    fn on_turn_start(&self, _trace_id: &TraceId, _history_len: usize) {
        panic!("turn_start panic");
    }

    fn on_tool_call(&self, _trace_id: &TraceId, _call: &ToolCall) {
        panic!("tool_call panic");
    }

    fn on_turn_complete(&self, _trace_id: &TraceId, _response: &ChatResponse, _elapsed: Duration) {
        panic!("turn_complete panic");
    }

    fn on_turn_failure(&self, _trace_id: &TraceId, _error: &ChatError, _elapsed: Duration) {
        panic!("turn_failure panic");
    }
}

#[test]
fn safe_wrappers_forward_every_callback() {
    let provider = RecordingProviderHooks::default();
    exercise_provider_hooks(&SafeProviderHooks::new(provider.clone()));
    assert_eq!(
        *provider.events.lock().expect("events lock"),
        vec!["attempt_start", "rotation", "success", "failure"]
    );

    let chat = RecordingChatHooks::default();
    exercise_chat_hooks(&SafeChatHooks::new(chat.clone()));
    assert_eq!(
        *chat.events.lock().expect("events lock"),
        vec!["start", "tool_call", "complete", "failure"]
    );
}

#[test]
fn safe_wrappers_swallow_observer_panics() {
    exercise_provider_hooks(&SafeProviderHooks::new(PanicProviderHooks));
    exercise_chat_hooks(&SafeChatHooks::new(PanicChatHooks));
}

#[tokio::test]
async fn panicking_observer_does_not_break_rotation() {
    let rotator = Rotator::new(CredentialPool::parse("key-a,key-b"), ModelPool::default());
    let hooks = SafeProviderHooks::new(PanicProviderHooks);
    let attempts = Arc::new(Mutex::new(0_u32));

    let value = execute_with_rotation(
        &rotator,
        ProviderId::Gemini,
        "initial_call",
        &hooks,
        {
            let attempts = Arc::clone(&attempts);
            move |slot| {
                let attempts = Arc::clone(&attempts);
                async move {
                    let mut attempts = attempts.lock().expect("attempts lock");
                    *attempts += 1;
                    if *attempts == 1 {
                        Err(ProviderError::unavailable("overloaded").with_status(503))
                    } else {
                        Ok(slot.model)
                    }
                }
            }
        },
    )
    .await
    .expect("second attempt succeeds despite panicking hooks");

    assert_eq!(value, "gemini-3-pro-preview");
    assert_eq!(*attempts.lock().expect("attempts lock"), 2);
}
