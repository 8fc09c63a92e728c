//! View state and its pure transitions.
//!
//! Every user interaction becomes an [`Event`]. [`ViewState::apply`] never
//! mutates in place; it returns the next state, which keeps the transitions
//! testable without a catalog or a terminal.

use tracing::debug;

use crate::pipeline::SortOrder;

pub const DEFAULT_PAGE_SIZE: usize = 8;

/// A user interaction that may change the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SearchChanged(String),
    /// `None` selects all categories
    CategorySelected(Option<String>),
    /// `None` restores source order
    SortChanged(Option<SortOrder>),
    PageRequested(usize),
    NextPage,
    PreviousPage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub category: Option<String>,
    pub sort: Option<SortOrder>,
    pub page: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            category: None,
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Selected category as the filter stage expects it.
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Next state after `event`.
    ///
    /// `total_pages` is the page count of the collection currently on screen;
    /// page requests outside `1..=total_pages` leave the state unchanged.
    pub fn apply(&self, event: &Event, total_pages: usize) -> ViewState {
        match event {
            Event::SearchChanged(query) => ViewState {
                query: query.clone(),
                page: 1,
                ..self.clone()
            },
            Event::CategorySelected(category) => ViewState {
                category: category.clone().filter(|c| !c.is_empty()),
                page: 1,
                ..self.clone()
            },
            Event::SortChanged(sort) => ViewState {
                sort: *sort,
                page: 1,
                ..self.clone()
            },
            Event::PageRequested(page) => self.change_page(*page, total_pages),
            Event::NextPage => self.change_page(self.page.saturating_add(1), total_pages),
            Event::PreviousPage => self.change_page(self.page.saturating_sub(1), total_pages),
        }
    }

    fn change_page(&self, new_page: usize, total_pages: usize) -> ViewState {
        if new_page < 1 || new_page > total_pages {
            debug!("Ignoring page request {} (valid: 1..={})", new_page, total_pages);
            return self.clone();
        }

        ViewState {
            page: new_page,
            ..self.clone()
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
