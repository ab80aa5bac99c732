//! Tracing-based observability hooks for provider attempts and chat turns.
//!
//! Credentials are identified by pool index only.
//!
//! ```rust
//! use fbobserve::TracingObservabilityHooks;
//! use fbchat::ChatRuntimeHooks;
//!
//! fn accepts_chat_hooks(_hooks: &dyn ChatRuntimeHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_chat_hooks(&hooks);
//! ```

use std::time::Duration;

use fbchat::{ChatError, ChatResponse, ChatRuntimeHooks};
use fbcommon::TraceId;
use fbprovider::{ProviderError, ProviderId, ProviderOperationHooks, RotationSlot, ToolCall};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ProviderOperationHooks for TracingObservabilityHooks {
    fn on_attempt_start(
        &self,
        provider: ProviderId,
        operation: &str,
        attempt: u32,
        slot: &RotationSlot,
    ) {
        tracing::info!(
            phase = "provider",
            event = "attempt_start",
            provider = %provider,
            operation,
            attempt,
            model = slot.model.as_str(),
            credential_index = slot.credential_index
        );
    }

    fn on_rotation(
        &self,
        provider: ProviderId,
        operation: &str,
        attempt: u32,
        slot: &RotationSlot,
        error: &ProviderError,
    ) {
        tracing::warn!(
            phase = "provider",
            event = "rotation",
            provider = %provider,
            operation,
            attempt,
            model = slot.model.as_str(),
            credential_index = slot.credential_index,
            error_kind = ?error.kind,
            status = error.status,
            error = %error
        );
    }

    fn on_success(&self, provider: ProviderId, operation: &str, attempts: u32) {
        tracing::info!(
            phase = "provider",
            event = "success",
            provider = %provider,
            operation,
            attempts
        );
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        attempts: u32,
        error: &ProviderError,
    ) {
        tracing::error!(
            phase = "provider",
            event = "failure",
            provider = %provider,
            operation,
            attempts,
            error_kind = ?error.kind,
            status = error.status,
            error = %error
        );
    }
}

impl ChatRuntimeHooks for TracingObservabilityHooks {
    fn on_turn_start(&self, trace_id: &TraceId, history_len: usize) {
        tracing::info!(
            phase = "chat",
            event = "turn_start",
            trace_id = %trace_id,
            history_len
        );
    }

    fn on_tool_call(&self, trace_id: &TraceId, call: &ToolCall) {
        tracing::info!(
            phase = "chat",
            event = "tool_call",
            trace_id = %trace_id,
            tool_name = call.name.as_str(),
            tool_call_id = call.id.as_str(),
            argument_keys = ?argument_keys(&call.arguments)
        );
        tracing::debug!(
            phase = "chat",
            event = "tool_call_arguments",
            trace_id = %trace_id,
            tool_call_id = call.id.as_str(),
            arguments = call.arguments.as_str()
        );
    }

    fn on_turn_complete(&self, trace_id: &TraceId, response: &ChatResponse, elapsed: Duration) {
        tracing::info!(
            phase = "chat",
            event = "turn_complete",
            trace_id = %trace_id,
            found_products = response.found_products.as_ref().map(Vec::len),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_turn_failure(&self, trace_id: &TraceId, error: &ChatError, elapsed: Duration) {
        tracing::error!(
            phase = "chat",
            event = "turn_failure",
            trace_id = %trace_id,
            error_kind = ?error.kind,
            elapsed_ms = elapsed.as_millis() as u64,
            error = %error
        );
    }
}

/// Top-level argument names only; values carry user search text.
pub(crate) fn argument_keys(arguments: &str) -> Vec<String> {
    match serde_json::from_str::<serde_json::Value>(arguments) {
        Ok(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
