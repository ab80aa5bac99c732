//! Conversational orchestration for the shopping assistant.
//!
//! `ChatService::respond` runs one user turn: an initial completion with the
//! inventory search tool declared, and, when the model asks for a search, the
//! inventory lookup followed by a second completion that sees the results.
//!
//! ```rust
//! use fbchat::{ChatResponse, ConversationTurn, TurnRole};
//!
//! let turn = ConversationTurn::user("Show me laptops under 1000");
//! assert_eq!(turn.role, TurnRole::User);
//! assert_eq!(ChatResponse::text("hi").product_count(), 0);
//! ```

mod error;
mod hooks;
mod instruction;
mod plan;
mod service;
mod types;

pub mod prelude {
    pub use crate::{
        ChatError, ChatErrorKind, ChatResponse, ChatRuntimeHooks, ChatService, ChatServiceBuilder,
        ConversationTurn, NoopChatRuntimeHooks, TurnPlan, TurnRole, UserContext,
    };
    pub use fbcommon::TraceId;
}

pub use error::{ChatError, ChatErrorKind, NEURAL_BUSY_MESSAGE, SETUP_REQUIRED_MESSAGE};
pub use hooks::{ChatRuntimeHooks, NoopChatRuntimeHooks};
pub use instruction::{DEFAULT_CUSTOMER_NAME, OFF_TOPIC_REPLY, system_instruction};
pub use plan::TurnPlan;
pub use service::{
    ChatService, ChatServiceBuilder, DEFAULT_TEMPERATURE, DIRECT_FALLBACK_MESSAGE,
    TOOL_FALLBACK_MESSAGE,
};
pub use types::{ChatResponse, ConversationTurn, TurnRole, UserContext};
pub use fbcommon::TraceId;
