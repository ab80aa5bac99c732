//! Metrics-based observability hooks for provider attempts and chat turns.
//!
//! ```rust
//! use fbobserve::MetricsObservabilityHooks;
//! use fbprovider::ProviderOperationHooks;
//!
//! fn accepts_provider_hooks(_hooks: &dyn ProviderOperationHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_provider_hooks(&hooks);
//! ```

use std::time::Duration;

use fbchat::{ChatError, ChatResponse, ChatRuntimeHooks};
use fbcommon::TraceId;
use fbprovider::{ProviderError, ProviderId, ProviderOperationHooks, RotationSlot, ToolCall};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ProviderOperationHooks for MetricsObservabilityHooks {
    fn on_attempt_start(
        &self,
        provider: ProviderId,
        operation: &str,
        _attempt: u32,
        slot: &RotationSlot,
    ) {
        metrics::counter!(
            "flipbazzar_provider_attempt_start_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "model" => slot.model.clone()
        )
        .increment(1);
    }

    fn on_rotation(
        &self,
        provider: ProviderId,
        operation: &str,
        _attempt: u32,
        slot: &RotationSlot,
        error: &ProviderError,
    ) {
        metrics::counter!(
            "flipbazzar_provider_rotation_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "model" => slot.model.clone(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }

    fn on_success(&self, provider: ProviderId, operation: &str, attempts: u32) {
        metrics::counter!(
            "flipbazzar_provider_success_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "flipbazzar_provider_attempts_per_success",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .record(attempts as f64);
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        attempts: u32,
        error: &ProviderError,
    ) {
        metrics::counter!(
            "flipbazzar_provider_failure_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "flipbazzar_provider_attempts_per_failure",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .record(attempts as f64);
    }
}

impl ChatRuntimeHooks for MetricsObservabilityHooks {
    fn on_turn_start(&self, _trace_id: &TraceId, _history_len: usize) {
        metrics::counter!("flipbazzar_chat_turn_start_total").increment(1);
    }

    fn on_tool_call(&self, _trace_id: &TraceId, call: &ToolCall) {
        metrics::counter!(
            "flipbazzar_chat_tool_call_total",
            "tool_name" => call.name.clone()
        )
        .increment(1);
    }

    fn on_turn_complete(&self, _trace_id: &TraceId, response: &ChatResponse, elapsed: Duration) {
        let path = if response.found_products.is_some() {
            "tool_followup"
        } else {
            "direct"
        };

        metrics::counter!("flipbazzar_chat_turn_complete_total", "path" => path).increment(1);
        metrics::histogram!("flipbazzar_chat_turn_duration_seconds", "path" => path)
            .record(elapsed.as_secs_f64());
        metrics::histogram!("flipbazzar_chat_found_products")
            .record(response.product_count() as f64);
    }

    fn on_turn_failure(&self, _trace_id: &TraceId, error: &ChatError, elapsed: Duration) {
        metrics::counter!(
            "flipbazzar_chat_turn_failure_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!("flipbazzar_chat_turn_duration_seconds", "path" => "failure")
            .record(elapsed.as_secs_f64());
    }
}
