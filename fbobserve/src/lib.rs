//! Observability hooks for credential rotation and conversation turns.
//!
//! ```rust
//! use fbobserve::{MetricsObservabilityHooks, SafeChatHooks, SafeProviderHooks, TracingObservabilityHooks};
//!
//! let _provider_hooks = SafeProviderHooks::new(TracingObservabilityHooks);
//! let _chat_hooks = SafeChatHooks::new(MetricsObservabilityHooks);
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeChatHooks, SafeProviderHooks};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        MetricsObservabilityHooks, SafeChatHooks, SafeProviderHooks, TracingObservabilityHooks,
    };
}

#[cfg(test)]
mod tests;
