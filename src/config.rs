//! Environment-driven configuration
//!
//! Values are read once at startup, after `dotenvy` has loaded any `.env` file.
//!
//! - `CATALOG_API_URL`: products endpoint (default `https://dummyjson.com/products`)
//! - `CATALOG_PAGE_SIZE`: products per page (default 8)

use tracing::warn;

use crate::source::DEFAULT_PRODUCTS_URL;
use crate::view_state::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub products_url: String,
    pub page_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("CATALOG_API_URL").ok(),
            std::env::var("CATALOG_PAGE_SIZE").ok(),
        )
    }

    fn from_values(products_url: Option<String>, page_size: Option<String>) -> Self {
        let products_url = products_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PRODUCTS_URL.to_string());

        Self {
            products_url,
            page_size: parse_page_size(page_size.as_deref()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn parse_page_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_PAGE_SIZE;
    };

    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => size,
        _ => {
            warn!(
                "CATALOG_PAGE_SIZE={:?} is not a positive integer - using {}",
                raw, DEFAULT_PAGE_SIZE
            );
            DEFAULT_PAGE_SIZE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.products_url, "https://dummyjson.com/products");
        assert_eq!(config.page_size, 8);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_values(
            Some("http://localhost:8080/products".into()),
            Some(" 12 ".into()),
        );
        assert_eq!(config.products_url, "http://localhost:8080/products");
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        assert_eq!(parse_page_size(Some("0")), 8);
        assert_eq!(parse_page_size(Some("-3")), 8);
        assert_eq!(parse_page_size(Some("eight")), 8);
    }

    #[test]
    fn test_blank_url_falls_back() {
        let config = Config::from_values(Some("   ".into()), None);
        assert_eq!(config.products_url, DEFAULT_PRODUCTS_URL);
    }
}
