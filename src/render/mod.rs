//! # Terminal rendering
//!
//! Pure projections from catalog data and view state to text. Nothing here
//! touches the stored products: truncation, rounding and labels exist only
//! in the returned strings.
//!
//! ## Card layout
//!
//! ```text
//! +--------------------------------+
//! | Essence Mascara Lash...        |
//! | img: https://cdn.example/1.png |
//! | ★4.9 (3 reviews)               |
//! | $9.27  was $9.99               |
//! | [ Add to Cart ]                |
//! +--------------------------------+
//! ```

use std::fmt::Write;

use crate::models::Product;
use crate::pricing::{final_price, format_price};
use crate::view_state::ViewState;

pub const TITLE: &str = "Product Catalog";
pub const EMPTY_MESSAGE: &str = "No products match your search or filter.";
pub const SEARCH_PLACEHOLDER: &str = "Search by title, category, or tags...";
pub const ALL_CATEGORIES: &str = "All Categories";

const TITLE_LIMIT: usize = 20;
const CARD_WIDTH: usize = 36;
const STAR: char = '\u{2605}';

/// Shorten a title to 20 characters plus an ellipsis.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_LIMIT {
        let mut short: String = title.chars().take(TITLE_LIMIT).collect();
        short.push_str("...");
        short
    } else {
        title.to_string()
    }
}

/// Category name with its first letter uppercased, as shown in the menu.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pads short lines to the card width; longer lines run past the right border.
fn card_line(out: &mut String, text: &str) {
    let inner = CARD_WIDTH - 3;
    let _ = writeln!(out, "| {text:<inner$} |");
}

fn card_border(out: &mut String) {
    let _ = writeln!(out, "+{}+", "-".repeat(CARD_WIDTH - 1));
}

pub fn render_card(product: &Product) -> String {
    let mut out = String::new();
    card_border(&mut out);
    card_line(&mut out, &truncate_title(&product.title));
    card_line(&mut out, &format!("img: {}", product.thumbnail));
    card_line(
        &mut out,
        &format!(
            "{STAR}{:.1} ({} reviews)",
            product.rating,
            product.review_count()
        ),
    );
    card_line(
        &mut out,
        &format!(
            "${}  was ${}",
            format_price(final_price(product.price, product.discount_percentage)),
            product.price
        ),
    );
    card_line(&mut out, "[ Add to Cart ]");
    card_border(&mut out);
    out
}

/// Placeholder cards drawn while the product list is still loading
pub fn render_skeleton(page_size: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}\n");
    for _ in 0..page_size {
        card_border(&mut out);
        for width in [20, 28, 14, 16, 15] {
            card_line(&mut out, &"░".repeat(width));
        }
        card_border(&mut out);
    }
    out
}

pub fn render_category_menu(categories: &[String], selected: Option<&str>) -> String {
    let mut out = String::new();
    let marker = |active: bool| if active { '*' } else { ' ' };

    let _ = writeln!(out, "{} {ALL_CATEGORIES}", marker(selected.is_none()));
    for category in categories {
        let _ = writeln!(
            out,
            "{} {} ({category})",
            marker(selected == Some(category.as_str())),
            category_label(category)
        );
    }
    out
}

fn render_toolbar(out: &mut String, state: &ViewState) {
    let search = if state.query.is_empty() {
        SEARCH_PLACEHOLDER.to_string()
    } else {
        format!("\"{}\"", state.query)
    };
    let category = state
        .category_filter()
        .map_or_else(|| ALL_CATEGORIES.to_string(), category_label);
    let sort = state
        .sort
        .map_or_else(|| "none".to_string(), |order| order.to_string());

    let _ = writeln!(out, "Search: {search}");
    let _ = writeln!(out, "Category: {category} | Sort: {sort}");
}

fn render_pager(out: &mut String, page: usize, total_pages: usize) {
    let previous = if page > 1 { "< prev" } else { "      " };
    let next = if page < total_pages { "next >" } else { "      " };
    let _ = writeln!(out, "{previous}   Page {page} of {total_pages}   {next}");
}

/// Full view: header, toolbar, the cards of the current page and the pager.
pub fn render_view(state: &ViewState, page_items: &[Product], total_pages: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}\n");
    render_toolbar(&mut out, state);
    out.push('\n');

    if page_items.is_empty() {
        let _ = writeln!(out, "{EMPTY_MESSAGE}");
    } else {
        for product in page_items {
            out.push_str(&render_card(product));
        }
    }

    out.push('\n');
    render_pager(&mut out, state.page, total_pages);
    out
}

pub fn render_help() -> String {
    [
        "Commands:",
        "  search <text> | / <text>     filter by title, category or tag",
        "  category <name> | all        filter by category",
        "  categories                   list categories",
        "  sort <price|rating|title> [asc|desc] | sort off",
        "  page <n> | next | prev       change page",
        "  help | quit",
    ]
    .join("\n")
}
