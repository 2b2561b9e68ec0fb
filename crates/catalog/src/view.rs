//! Derived view of the catalog under the current navigation and filters.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::product::{Category, Product};

/// The catalog filter unit: one shopper's current search text, selected
/// top-level category, and advanced filter panel state.
///
/// The view owns no products; [`CatalogView::visible`] derives the visible
/// subset from the supplied catalog on every call, preserving catalog order.
/// All operations are total and side-effect free.
///
/// The top-nav category and the filter-panel category selections are
/// independent constraints and are both applied (AND semantics); see the
/// notes in DESIGN.md.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    selected_category: Category,
    search_query: String,
    filters: FilterState,
}

impl CatalogView {
    /// Creates a view with the default navigation state: category `All`,
    /// empty search, default filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected top-level category.
    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    /// Returns the current search query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the advanced filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Returns the advanced filter state for in-place editing (toggles,
    /// price slider).
    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Selects a top-level category from the primary navigation.
    pub fn set_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    /// Sets the free-text search query.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Replaces the advanced filter state wholesale (the panel's "apply"
    /// path hands back a complete state).
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    /// Restores the filter panel to defaults.
    ///
    /// Leaves the selected category and search query untouched. Idempotent.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
    }

    /// Number of active filter panel selections (the filter button badge).
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    /// The inclusion predicate: true when the product passes the selected
    /// category, the search query, and every filter panel dimension.
    pub fn matches(&self, product: &Product) -> bool {
        // Top-nav category
        if self.selected_category != Category::All && product.category != self.selected_category {
            return false;
        }

        // Search: case-insensitive substring on the name
        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            if !product.name.to_lowercase().contains(&query) {
                return false;
            }
        }

        // Price range, inclusive on both ends
        let (min, max) = self.filters.price_range;
        if product.price < min || product.price > max {
            return false;
        }

        // Colors: at least one selected color on the product. A product
        // without colors fails a non-empty color filter.
        if !self.filters.colors.is_empty()
            && !self
                .filters
                .colors
                .iter()
                .any(|color| product.colors.contains(color))
        {
            return false;
        }

        // Sizes, same intersection rule
        if !self.filters.sizes.is_empty()
            && !self
                .filters
                .sizes
                .iter()
                .any(|size| product.sizes.contains(size))
        {
            return false;
        }

        // Filter-panel categories, applied on top of the top-nav category
        if !self.filters.categories.is_empty()
            && !self.filters.categories.contains(&product.category)
        {
            return false;
        }

        true
    }

    /// Derives the visible product subset, preserving catalog order.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }
}
