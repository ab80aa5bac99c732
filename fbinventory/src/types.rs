//! Product records and search constraints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub specs: String,
    pub rating: f64,
    pub image_url: String,
    pub in_stock: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Optional, independently applied search constraints.
///
/// A blank category, the category `all`, and a blank query all mean
/// "no constraint". `max_price` is applied as given, including zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.category_filter().is_none()
            && self.query_filter().is_none()
            && self.max_price.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category_filter()
            && !product.category.to_lowercase().contains(&category)
        {
            return false;
        }

        if let Some(max_price) = self.max_price
            && product.price > max_price
        {
            return false;
        }

        if let Some(query) = self.query_filter() {
            let in_text = [&product.name, &product.description, &product.specs]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));
            let in_tags = product
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query));

            if !in_text && !in_tags {
                return false;
            }
        }

        true
    }

    fn category_filter(&self) -> Option<String> {
        let category = self.category.as_deref()?.trim();
        if category.is_empty() || category.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(category.to_lowercase())
        }
    }

    fn query_filter(&self) -> Option<String> {
        let query = self.query.as_deref()?.trim();
        if query.is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        }
    }
}
