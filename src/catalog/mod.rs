use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::models::Product;

/// The full product collection loaded at mount, with its derived categories.
///
/// Nothing mutates a catalog once it is built.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Self {
        let categories = distinct_categories(&products);

        Self {
            products,
            categories,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::from_products(Vec::new())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|product| seen.insert(product.category.as_str()))
        .map(|product| product.category.clone())
        .collect()
}
