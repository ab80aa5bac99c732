//! Runtime hook contracts for observing conversation turns.
//!
//! ```rust
//! use fbchat::{ChatRuntimeHooks, NoopChatRuntimeHooks};
//!
//! fn accepts_hooks(_hooks: &dyn ChatRuntimeHooks) {}
//!
//! let hooks = NoopChatRuntimeHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use fbcommon::TraceId;
use fbprovider::ToolCall;

use crate::{ChatError, ChatResponse};

pub trait ChatRuntimeHooks: Send + Sync {
    fn on_turn_start(&self, _trace_id: &TraceId, _history_len: usize) {}

    fn on_tool_call(&self, _trace_id: &TraceId, _call: &ToolCall) {}

    fn on_turn_complete(&self, _trace_id: &TraceId, _response: &ChatResponse, _elapsed: Duration) {
    }

    fn on_turn_failure(&self, _trace_id: &TraceId, _error: &ChatError, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopChatRuntimeHooks;

impl ChatRuntimeHooks for NoopChatRuntimeHooks {}
