//! Stable catalog ordering.

use std::cmp::Ordering;
use std::fmt;

use crate::models::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Rating,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A sort key paired with its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

impl SortKey {
    /// Parse a sort key name (`price`, `rating`, `title`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "price" => Some(SortKey::Price),
            "rating" => Some(SortKey::Rating),
            "title" => Some(SortKey::Title),
            _ => None,
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Rating => a.rating.total_cmp(&b.rating),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

impl SortDirection {
    /// Parse `asc`/`ascending` or `desc`/`descending`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            SortKey::Price => "price",
            SortKey::Rating => "rating",
            SortKey::Title => "title",
        };
        let direction = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{key} {direction}")
    }
}

/// Order products by `key` in `direction`. Ties keep their input order.
pub fn sort(products: &[Product], key: SortKey, direction: SortDirection) -> Vec<Product> {
    let mut sorted = products.to_vec();
    // slice::sort_by is stable; flipping the comparison keeps equal elements in place
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| key.compare(a, b)),
        SortDirection::Descending => sorted.sort_by(|a, b| key.compare(b, a)),
    }
    sorted
}
