//! Advanced filter panel state.

use common::Money;
use serde::{Deserialize, Serialize};

use crate::product::Category;

/// Default lower bound of the price slider.
pub const DEFAULT_PRICE_FLOOR: Money = Money::zero();

/// Default upper bound of the price slider ($10,000).
pub const DEFAULT_PRICE_CEILING: Money = Money::from_dollars(10_000);

/// Selections made in the advanced filter panel.
///
/// An empty selection list means "no constraint from that dimension", never
/// "exclude all". The price range is inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Inclusive `(min, max)` price bounds, `min <= max`.
    pub price_range: (Money, Money),

    /// Selected color names, deduplicated.
    pub colors: Vec<String>,

    /// Selected size labels, deduplicated.
    pub sizes: Vec<String>,

    /// Selected filter-panel categories, independent of the top-nav category.
    pub categories: Vec<Category>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_range: (DEFAULT_PRICE_FLOOR, DEFAULT_PRICE_CEILING),
            colors: Vec::new(),
            sizes: Vec::new(),
            categories: Vec::new(),
        }
    }
}

impl FilterState {
    /// Sets the inclusive price bounds.
    pub fn set_price_range(&mut self, min: Money, max: Money) {
        self.price_range = (min, max);
    }

    /// Adds the color if absent, removes it if present.
    pub fn toggle_color(&mut self, color: &str) {
        if let Some(pos) = self.colors.iter().position(|c| c == color) {
            self.colors.remove(pos);
        } else {
            self.colors.push(color.to_string());
        }
    }

    /// Adds the size if absent, removes it if present.
    pub fn toggle_size(&mut self, size: &str) {
        if let Some(pos) = self.sizes.iter().position(|s| s == size) {
            self.sizes.remove(pos);
        } else {
            self.sizes.push(size.to_string());
        }
    }

    /// Adds the category if absent, removes it if present.
    pub fn toggle_category(&mut self, category: Category) {
        if let Some(pos) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category);
        }
    }

    /// Number of active selections across colors, sizes and categories.
    ///
    /// The price range never contributes, even when non-default; this is the
    /// badge count on the filter button.
    pub fn active_count(&self) -> usize {
        self.colors.len() + self.sizes.len() + self.categories.len()
    }
}
