//! Search and category filtering.

use crate::models::Product;

/// Case-insensitive substring match against title, category and tags.
///
/// An empty query matches every product.
pub fn matches_search(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    product.title.to_lowercase().contains(&query)
        || product.category.to_lowercase().contains(&query)
        || product
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}

/// Exact category match; an unset or empty category matches everything.
pub fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        None | Some("") => true,
        Some(category) => product.category == category,
    }
}

/// Keep the products matching both the search query and the category, in input order.
pub fn filter(products: &[Product], query: &str, category: Option<&str>) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches_search(product, query) && matches_category(product, category))
        .cloned()
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn product(id: u64, title: &str, category: &str, tags: &[&str]) -> Product {
        Product {
            id,
            title: title.to_string(),
            category: category.to_string(),
            price: 10.0,
            discount_percentage: 0.0,
            rating: 4.0,
            thumbnail: format!("https://example.test/{id}.png"),
            tags: tags.iter().map(ToString::to_string).collect(),
            reviews: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Plain Shirt", "mens-shirts", &["clothing"]),
            product(2, "Lipstick", "beauty", &["red-shirt-tag"]),
            product(3, "Oak Table", "furniture", &["wood"]),
            product(4, "Mascara", "beauty", &["eyes"]),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_constraints_is_identity() {
        let products = sample();
        assert_eq!(filter(&products, "", None), products);
        assert_eq!(filter(&products, "", Some("")), products);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = sample();
        let upper = filter(&products, "SHIRT", None);
        let lower = filter(&products, "shirt", None);

        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec![1, 2]);
    }

    #[test]
    fn test_search_matches_category_text() {
        let products = sample();
        assert_eq!(ids(&filter(&products, "BEAU", None)), vec![2, 4]);
    }

    #[test]
    fn test_search_matches_tag_substring() {
        let products = sample();
        assert_eq!(ids(&filter(&products, "red", None)), vec![2]);
    }

    #[test]
    fn test_category_is_exact() {
        let products = sample();
        assert_eq!(ids(&filter(&products, "", Some("beauty"))), vec![2, 4]);
        assert!(filter(&products, "", Some("Beauty")).is_empty());
        assert!(filter(&products, "", Some("beaut")).is_empty());
    }

    #[test]
    fn test_search_and_category_combined() {
        let products = sample();
        assert!(filter(&products, "red", Some("furniture")).is_empty());
        assert_eq!(ids(&filter(&products, "MAS", Some("beauty"))), vec![4]);
    }

    #[test]
    fn test_result_is_subset_in_input_order() {
        let products = sample();
        let filtered = filter(&products, "a", None);

        let mut cursor = products.iter();
        for kept in &filtered {
            assert!(cursor.any(|p| p == kept));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(filter(&[], "anything", Some("beauty")).is_empty());
    }
}
