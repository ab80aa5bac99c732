//! Provider layer: model types, credential/model rotation, and the retry loop.
//!
//! ```rust
//! use fbprovider::{CredentialPool, ModelPool, Rotator};
//!
//! let rotator = Rotator::new(CredentialPool::parse("key-a,key-b"), ModelPool::default());
//! assert_eq!(rotator.combinations(), 4);
//! ```

mod credentials;
mod error;
mod model;
mod provider;
mod resilience;
mod rotation;

pub mod adapters;
pub mod prelude;

pub use credentials::{CredentialPool, DEFAULT_MODELS, ModelPool, SecretString};
pub use error::{FailureClass, ProviderError, ProviderErrorKind, classify_failure};
pub use model::{
    Message, ModelRequest, ModelRequestBuilder, ModelResponse, OutputItem, ProviderId, Role,
    StopReason, TokenUsage, ToolCall, ToolDefinition, ToolResult,
};
pub use provider::{ModelProvider, ProviderFuture};
pub use resilience::{NoopOperationHooks, ProviderOperationHooks, execute_with_rotation};
pub use rotation::{RotationCursor, RotationSlot, Rotator};
pub use fbcommon::BoxFuture;
