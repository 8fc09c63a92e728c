use tracing::{error, info};

use crate::catalog::Catalog;
use crate::models::Product;
use crate::pipeline;
use crate::render;
use crate::traits::ProductSource;
use crate::view_state::{Event, ViewState};

/// Owns the loaded catalog and the view state, and derives what is shown.
pub struct CatalogView {
    catalog: Catalog,
    state: ViewState,
    /// Filtered and sorted products for the current state
    visible: Vec<Product>,
}

impl CatalogView {
    /// Load the catalog once from `source` and build the initial view.
    ///
    /// A failed load is logged and leaves the catalog empty.
    pub async fn mount(source: &dyn ProductSource, page_size: usize) -> Self {
        let catalog = match source.load().await {
            Ok(products) => {
                let catalog = Catalog::from_products(products);
                info!(
                    "Loaded {} products across {} categories from {}",
                    catalog.products().len(),
                    catalog.categories().len(),
                    source.config().name
                );
                catalog
            }
            Err(e) => {
                error!(
                    "Failed to fetch product data from {}: {}",
                    source.config().products_url,
                    e
                );
                Catalog::empty()
            }
        };

        Self::new(catalog, ViewState::new(page_size))
    }

    pub fn new(catalog: Catalog, state: ViewState) -> Self {
        let mut view = Self {
            catalog,
            state,
            visible: Vec::new(),
        };
        view.derive();
        view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Products matching the current search, category and sort
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn total_pages(&self) -> usize {
        pipeline::total_pages(self.visible.len(), self.state.page_size)
    }

    pub fn current_page(&self) -> &[Product] {
        pipeline::paginate(&self.visible, self.state.page, self.state.page_size)
    }

    /// Apply a user event and re-derive the visible products when needed.
    pub fn dispatch(&mut self, event: &Event) {
        let next = self.state.apply(event, self.total_pages());
        let rederive = next.query != self.state.query
            || next.category != self.state.category
            || next.sort != self.state.sort;

        self.state = next;
        if rederive {
            self.derive();
        }
    }

    pub fn render(&self) -> String {
        render::render_view(&self.state, self.current_page(), self.total_pages())
    }

    pub fn render_categories(&self) -> String {
        render::render_category_menu(self.catalog.categories(), self.state.category_filter())
    }

    fn derive(&mut self) {
        let filtered = pipeline::filter(
            self.catalog.products(),
            &self.state.query,
            self.state.category_filter(),
        );

        self.visible = match self.state.sort {
            Some(order) => pipeline::sort(&filtered, order.key, order.direction),
            None => filtered,
        };
    }
}
