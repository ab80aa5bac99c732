//! Product catalog and inventory search for the shopping assistant.
//!
//! ```rust
//! use fbinventory::{InMemoryInventory, SearchParams};
//!
//! let inventory = InMemoryInventory::bundled();
//! let budget = SearchParams::new().with_max_price(500.0);
//! assert!(inventory.products().iter().any(|product| budget.matches(product)));
//! ```

mod catalog;
mod error;
mod store;
mod tool;
mod types;

pub use catalog::bundled_catalog;
pub use error::{InventoryError, InventoryErrorKind};
pub use store::{DEFAULT_SEARCH_LATENCY, InMemoryInventory, InventoryStore};
pub use tool::{SEARCH_TOOL_NAME, search_tool_definition, tool_result_payload};
pub use types::{Product, SearchParams};
