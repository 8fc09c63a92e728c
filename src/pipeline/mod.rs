//! Client-side catalog pipeline: filter, then sort, then paginate.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::filter;
pub use paginate::{paginate, total_pages};
pub use sort::{SortDirection, SortKey, SortOrder, sort};
