//! Chat-layer errors and their user-facing messages.

use std::error::Error;
use std::fmt::{Display, Formatter};

use fbinventory::InventoryError;
use fbprovider::ProviderError;

pub const SETUP_REQUIRED_MESSAGE: &str = "⚙️ **Setup Required**: No API key is configured for the assistant. Please add one to the API_KEY setting.";

pub const NEURAL_BUSY_MESSAGE: &str = "⚠️ **Neural Busy**: My processors are currently at capacity. Please try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    Configuration,
    InvalidRequest,
    Provider,
    Tooling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Configuration, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidRequest, message)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Provider, message)
    }

    pub fn tooling(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Tooling, message)
    }

    /// Configuration problems get their own message; everything else reads as busy.
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            ChatErrorKind::Configuration => SETUP_REQUIRED_MESSAGE,
            _ => NEURAL_BUSY_MESSAGE,
        }
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ChatError {}

impl From<ProviderError> for ChatError {
    fn from(value: ProviderError) -> Self {
        if value.is_configuration() {
            ChatError::configuration(value.to_string())
        } else {
            ChatError::provider(value.to_string())
        }
    }
}

impl From<InventoryError> for ChatError {
    fn from(value: InventoryError) -> Self {
        ChatError::tooling(value.to_string())
    }
}
