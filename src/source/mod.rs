use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::error::FetchError;
use crate::models::{Product, ProductsResponse};
use crate::traits::{ProductSource, SourceConfig};

pub const DEFAULT_PRODUCTS_URL: &str = "https://dummyjson.com/products";

/// Loads the catalog from a JSON endpoint shaped like `{ "products": [...] }`
pub struct HttpProductSource {
    client: Client,
    config: SourceConfig,
}

impl HttpProductSource {
    pub fn new(products_url: impl Into<String>) -> Self {
        let config = SourceConfig {
            name: "HTTP".to_string(),
            products_url: products_url.into(),
        };

        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn load(&self) -> Result<Vec<Product>, FetchError> {
        info!("Fetching products from {}", self.config.products_url);

        let response = self.client.get(&self.config.products_url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        let payload: ProductsResponse = serde_json::from_str(&body)?;

        info!(
            "Fetched {} products from {}",
            payload.products.len(),
            self.config.name
        );
        Ok(payload.products)
    }
}
