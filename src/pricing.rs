//! Display-only price computation

/// Price after applying a percentage discount.
pub fn final_price(price: f64, discount_percentage: f64) -> f64 {
    let discount = discount_percentage / 100.0 * price;
    price - discount
}

/// Format a price with exactly two decimal places.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}
