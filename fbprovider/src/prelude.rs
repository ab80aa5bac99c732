//! Common `fbprovider` imports for downstream crates.

pub use crate::{
    CredentialPool, FailureClass, Message, ModelPool, ModelProvider, ModelRequest,
    ModelRequestBuilder, ModelResponse, NoopOperationHooks, OutputItem, ProviderError,
    ProviderErrorKind, ProviderFuture, ProviderId, ProviderOperationHooks, Role, RotationCursor,
    RotationSlot, Rotator, SecretString, StopReason, TokenUsage, ToolCall, ToolDefinition,
    ToolResult, classify_failure, execute_with_rotation,
};
pub use fbcommon::BoxFuture;
