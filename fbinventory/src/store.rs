//! Inventory store trait and the in-memory catalog implementation.
//!
//! ```rust
//! use fbinventory::{InMemoryInventory, SearchParams};
//!
//! let inventory = InMemoryInventory::bundled();
//! let laptops = SearchParams::new().with_category("laptop");
//!
//! let matching = inventory
//!     .products()
//!     .iter()
//!     .filter(|product| laptops.matches(product))
//!     .count();
//! assert_eq!(matching, 2);
//! assert_eq!(inventory.get("p4").map(|p| p.category.as_str()), Some("audio"));
//! ```

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use fbcommon::BoxFuture;
use futures_timer::Delay;

use crate::catalog::bundled_catalog;
use crate::{InventoryError, Product, SearchParams};

pub const DEFAULT_SEARCH_LATENCY: Duration = Duration::from_millis(500);

/// Read-only product lookup. Results keep catalog order; no match is an empty list.
pub trait InventoryStore: Send + Sync {
    fn search(&self, params: SearchParams) -> BoxFuture<'_, Vec<Product>>;
}

#[derive(Debug, Clone)]
pub struct InMemoryInventory {
    products: Arc<[Product]>,
    latency: Duration,
}

impl InMemoryInventory {
    pub fn new(products: Vec<Product>) -> Result<Self, InventoryError> {
        validate_catalog(&products)?;
        Ok(Self {
            products: products.into(),
            latency: DEFAULT_SEARCH_LATENCY,
        })
    }

    pub fn bundled() -> Self {
        Self {
            products: bundled_catalog().into(),
            latency: DEFAULT_SEARCH_LATENCY,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        let products = serde_json::from_str::<Vec<Product>>(json)
            .map_err(|err| InventoryError::catalog(format!("invalid catalog JSON: {err}")))?;
        Self::new(products)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn filter(&self, params: &SearchParams) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| params.matches(product))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryInventory {
    fn default() -> Self {
        Self::bundled()
    }
}

impl InventoryStore for InMemoryInventory {
    fn search(&self, params: SearchParams) -> BoxFuture<'_, Vec<Product>> {
        Box::pin(async move {
            if !self.latency.is_zero() {
                Delay::new(self.latency).await;
            }

            self.filter(&params)
        })
    }
}

fn validate_catalog(products: &[Product]) -> Result<(), InventoryError> {
    let mut seen = HashSet::new();
    for product in products {
        if product.id.trim().is_empty() {
            return Err(InventoryError::catalog(format!(
                "product '{}' has a blank id",
                product.name
            )));
        }

        if !seen.insert(product.id.as_str()) {
            return Err(InventoryError::catalog(format!(
                "duplicate product id '{}'",
                product.id
            )));
        }

        if !(0.0..=5.0).contains(&product.rating) {
            return Err(InventoryError::catalog(format!(
                "product '{}' has rating {} outside 0..=5",
                product.id, product.rating
            )));
        }
    }

    Ok(())
}
