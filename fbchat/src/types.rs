//! Conversation turns, user context, and chat responses.

use fbinventory::Product;
use fbprovider::{Message, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub text: String,
}

impl ConversationTurn {
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, text)
    }
}

impl From<&ConversationTurn> for Message {
    fn from(value: &ConversationTurn) -> Self {
        let role = match value.role {
            TurnRole::User => Role::User,
            TurnRole::Assistant => Role::Assistant,
        };
        Message::new(role, value.text.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserContext {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl UserContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_preferences(mut self, preferences: Vec<String>) -> Self {
        self.preferences = preferences;
        self
    }
}

/// Final answer for one turn. `found_products` is set only when the search tool ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_products: Option<Vec<Product>>,
}

impl ChatResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            found_products: None,
        }
    }

    pub fn with_products(text: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            text: text.into(),
            found_products: Some(products),
        }
    }

    pub fn product_count(&self) -> usize {
        self.found_products.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_convert_to_provider_messages() {
        let message = Message::from(&ConversationTurn::assistant("hello"));
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "hello");
    }

    #[test]
    fn response_serializes_found_products_only_when_present() {
        let plain = serde_json::to_value(ChatResponse::text("hi")).expect("serialize");
        assert!(plain.get("foundProducts").is_none());

        let with_products =
            serde_json::to_value(ChatResponse::with_products("hi", Vec::new())).expect("serialize");
        assert_eq!(with_products["foundProducts"], serde_json::json!([]));
    }

    #[test]
    fn turns_deserialize_from_lowercase_roles() {
        let turn: ConversationTurn =
            serde_json::from_str(r#"{"role":"assistant","text":"Welcome!"}"#).expect("turn");
        assert_eq!(turn, ConversationTurn::assistant("Welcome!"));
    }
}
