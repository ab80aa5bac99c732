//! Common imports for FlipBazzar assistant applications.

pub use crate::{AssistantConfig, build_assistant, build_assistant_with, build_gemini_provider};
pub use crate::{
    ChatError, ChatErrorKind, ChatResponse, ChatService, ChatServiceBuilder, ConversationTurn,
    CredentialPool, InMemoryInventory, InventoryStore, ModelPool, ModelProvider, Product,
    ProviderError, ProviderId, Rotator, SearchParams, TurnRole, UserContext,
};
pub use crate::{fb_history, fb_turn};
