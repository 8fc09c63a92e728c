//! Traits and interfaces for source-agnostic product loading

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Product;

/// Configuration for a product source
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Display name for the source
    pub name: String,
    /// Endpoint returning the full product list
    pub products_url: String,
}

/// Trait for anything that can hand the catalog its product list
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Get the configuration for this source
    fn config(&self) -> &SourceConfig;

    /// Load every product the source offers
    ///
    /// # Returns
    /// * `Result<Vec<Product>, FetchError>` - Products in source order or the load failure
    async fn load(&self) -> Result<Vec<Product>, FetchError>;
}
