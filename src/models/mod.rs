//! Data models for catalog products and the products API payload

use serde::Deserialize;

/// A single review attached to a product.
///
/// The catalog never looks inside a review; only the number of reviews is shown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Review(pub serde_json::Value);

/// A product listing as returned by the products endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
}

impl Product {
    /// Number of reviews, 0 when the payload carried none.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.reviews.as_ref().map_or(0, Vec::len)
    }
}

/// Envelope of the products endpoint response
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dummyjson_product() {
        let body = r#"{
            "products": [{
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "description": "ignored",
                "category": "beauty",
                "price": 9.99,
                "discountPercentage": 7.17,
                "rating": 4.94,
                "stock": 5,
                "tags": ["beauty", "mascara"],
                "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/1/thumbnail.png",
                "reviews": [{"rating": 2, "comment": "Very unhappy"}, {"rating": 5}]
            }],
            "total": 194,
            "skip": 0,
            "limit": 30
        }"#;

        let response: ProductsResponse = serde_json::from_str(body).unwrap();
        let product = &response.products[0];

        assert_eq!(product.id, 1);
        assert_eq!(product.category, "beauty");
        assert!((product.discount_percentage - 7.17).abs() < f64::EPSILON);
        assert_eq!(product.tags, vec!["beauty", "mascara"]);
        assert_eq!(product.review_count(), 2);
    }

    #[test]
    fn test_missing_reviews_and_tags_default() {
        let body = r#"{"id": 7, "title": "Plain", "category": "misc", "price": 3}"#;
        let product: Product = serde_json::from_str(body).unwrap();

        assert!(product.tags.is_empty());
        assert_eq!(product.review_count(), 0);
    }

    #[test]
    fn test_missing_products_field_is_rejected() {
        let result = serde_json::from_str::<ProductsResponse>(r#"{"items": []}"#);
        assert!(result.is_err());
    }
}
