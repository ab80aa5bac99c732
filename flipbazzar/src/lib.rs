//! Unified facade over the FlipBazzar assistant crates.
//!
//! Applications normally depend on this crate alone: it re-exports the
//! provider, inventory, chat, and observability crates and wires them together
//! from environment configuration.
//!
//! ```rust,no_run
//! use flipbazzar::prelude::*;
//!
//! # async fn run() -> Result<(), ProviderError> {
//! let assistant = build_assistant(AssistantConfig::from_env()?)?;
//! let history = fb_history![assistant => "Welcome to FlipBazzar!"];
//! let response = assistant
//!     .respond(&history, "Which laptop is best for coding?", None)
//!     .await;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

mod config;
mod macros;

pub mod prelude;
pub mod runtime;

pub use fbchat;
pub use fbcommon;
pub use fbinventory;
pub use fbobserve;
pub use fbprovider;

pub use config::{
    API_KEY_VAR, AssistantConfig, DEFAULT_TIMEOUT, GEMINI_BASE_URL_VAR, INVENTORY_LATENCY_VAR,
    MODELS_VAR, TEMPERATURE_VAR, TIMEOUT_VAR,
};
pub use fbchat::{
    ChatError, ChatErrorKind, ChatResponse, ChatRuntimeHooks, ChatService, ChatServiceBuilder,
    ConversationTurn, NEURAL_BUSY_MESSAGE, NoopChatRuntimeHooks, SETUP_REQUIRED_MESSAGE,
    TurnPlan, TurnRole, UserContext,
};
pub use fbcommon::{BoxFuture, TraceId};
pub use fbinventory::{
    InMemoryInventory, InventoryError, InventoryErrorKind, InventoryStore, Product,
    SEARCH_TOOL_NAME, SearchParams,
};
pub use fbobserve::{
    MetricsObservabilityHooks, SafeChatHooks, SafeProviderHooks, TracingObservabilityHooks,
};
pub use fbprovider::{
    CredentialPool, FailureClass, Message, ModelPool, ModelProvider, ModelRequest, ModelResponse,
    NoopOperationHooks, ProviderError, ProviderErrorKind, ProviderFuture, ProviderId,
    ProviderOperationHooks, Role, RotationSlot, Rotator, SecretString, classify_failure,
    execute_with_rotation,
};
pub use runtime::{build_assistant, build_assistant_with, build_gemini_provider};
