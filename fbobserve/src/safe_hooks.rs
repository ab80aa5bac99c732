//! Panic-isolating wrappers; a panicking observer never breaks a turn.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use fbchat::{ChatError, ChatResponse, ChatRuntimeHooks};
use fbcommon::TraceId;
use fbprovider::{ProviderError, ProviderId, ProviderOperationHooks, RotationSlot, ToolCall};

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
    fn on_attempt_start(
        &self,
        provider: ProviderId,
        operation: &str,
        attempt: u32,
        slot: &RotationSlot,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_attempt_start(provider, operation, attempt, slot)
        }));
    }

    fn on_rotation(
        &self,
        provider: ProviderId,
        operation: &str,
        attempt: u32,
        slot: &RotationSlot,
        error: &ProviderError,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_rotation(provider, operation, attempt, slot, error)
        }));
    }

    fn on_success(&self, provider: ProviderId, operation: &str, attempts: u32) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_success(provider, operation, attempts)
        }));
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        attempts: u32,
        error: &ProviderError,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(provider, operation, attempts, error)
        }));
    }
}

pub struct SafeChatHooks<H> {
    inner: H,
}

impl<H> SafeChatHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ChatRuntimeHooks for SafeChatHooks<H>
where
    H: ChatRuntimeHooks,
{
    fn on_turn_start(&self, trace_id: &TraceId, history_len: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_turn_start(trace_id, history_len)
        }));
    }

    fn on_tool_call(&self, trace_id: &TraceId, call: &ToolCall) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_tool_call(trace_id, call)));
    }

    fn on_turn_complete(&self, trace_id: &TraceId, response: &ChatResponse, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_turn_complete(trace_id, response, elapsed)
        }));
    }

    fn on_turn_failure(&self, trace_id: &TraceId, error: &ChatError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_turn_failure(trace_id, error, elapsed)
        }));
    }
}
