//! Search tool declaration, argument parsing, and result payloads.
//!
//! ```rust
//! use fbinventory::{SEARCH_TOOL_NAME, SearchParams, search_tool_definition};
//!
//! let definition = search_tool_definition();
//! assert_eq!(definition.name, SEARCH_TOOL_NAME);
//!
//! let params = SearchParams::from_tool_arguments(r#"{"category":"audio","maxPrice":400}"#)
//!     .expect("arguments should parse");
//! assert_eq!(params.category.as_deref(), Some("audio"));
//! assert_eq!(params.max_price, Some(400.0));
//! ```

use fbprovider::ToolDefinition;
use serde_json::{Value, json};

use crate::{InventoryError, Product, SearchParams};

pub const SEARCH_TOOL_NAME: &str = "searchFlipbazzarInventory";

pub fn search_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: SEARCH_TOOL_NAME.to_string(),
        description: "Search FlipBazzar's high-tech inventory for smartphones, laptops, and audio gadgets."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Tech keywords like 'OLED', '144Hz', 'M3 Chip'."
                },
                "category": {
                    "type": "string",
                    "description": "e.g., 'smartphone', 'laptop'."
                },
                "maxPrice": {
                    "type": "number",
                    "description": "Budget limit."
                }
            }
        })
        .to_string(),
    }
}

impl SearchParams {
    /// Parses tool-call arguments. Unknown fields are ignored and `null` means absent.
    pub fn from_tool_arguments(arguments: &str) -> Result<Self, InventoryError> {
        if arguments.trim().is_empty() {
            return Ok(Self::default());
        }

        let value = serde_json::from_str::<Value>(arguments).map_err(|err| {
            InventoryError::invalid_arguments(format!("invalid JSON arguments: {err}"))
        })?;

        if !value.is_object() {
            return Err(InventoryError::invalid_arguments(
                "expected JSON object arguments",
            ));
        }

        serde_json::from_value(value)
            .map_err(|err| InventoryError::invalid_arguments(format!("invalid arguments: {err}")))
    }
}

/// Serializes matches as `{"products": [...]}` for the tool-result turn.
pub fn tool_result_payload(products: &[Product]) -> Result<String, InventoryError> {
    serde_json::to_string(&json!({ "products": products })).map_err(|err| {
        InventoryError::catalog(format!("failed to serialize tool result: {err}"))
    })
}
