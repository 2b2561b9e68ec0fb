//! Product record and category taxonomy.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// Top-level product category.
///
/// `All` is only meaningful as a navigation selection; products in the
/// supplied list always carry one of the concrete categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No category restriction (the default navigation state).
    #[default]
    All,
    Women,
    Men,
    Bags,
    Shoes,
}

impl Category {
    /// Returns the category id as used in the external product list.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Women => "women",
            Category::Men => "men",
            Category::Bags => "bags",
            Category::Shoes => "shoes",
        }
    }

    /// Returns the display label shown on filter panel buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Items",
            Category::Women => "Women",
            Category::Men => "Men",
            Category::Bags => "Bags",
            Category::Shoes => "Shoes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A product record from the externally supplied list.
///
/// Immutable as far as this core is concerned; the presentation layer reads
/// fields directly. `colors` and `sizes` may be empty, which means the
/// product does not specify them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,

    /// Strike-through price when the product is marked down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,

    /// Asset URL, opaque to this core.
    #[serde(default)]
    pub image: String,

    pub category: Category,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,

    #[serde(default)]
    pub is_new: bool,

    #[serde(default)]
    pub is_on_sale: bool,
}

impl Product {
    /// Creates a product with the required fields; optional fields start
    /// empty/false and can be filled in directly.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            image: String::new(),
            category,
            colors: Vec::new(),
            sizes: Vec::new(),
            is_new: false,
            is_on_sale: false,
        }
    }

    /// Returns true when the strike-through price applies, i.e. the original
    /// price is present and higher than the current price.
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }
}
