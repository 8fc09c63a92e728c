//! Error types for loading products and parsing user commands

use thiserror::Error;

/// Failure to load the product list from the remote endpoint
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed products payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A line of user input that does not map to a view event
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("invalid page number: {0}")]
    InvalidPage(String),

    #[error("unknown sort key: {0} (expected price, rating or title)")]
    InvalidSortKey(String),

    #[error("unknown sort direction: {0} (expected asc or desc)")]
    InvalidSortDirection(String),
}
