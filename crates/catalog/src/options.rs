//! Filter panel option lists.
//!
//! The panel renders fixed option sets; the swatch hex values are passed
//! through to the presentation layer untouched.

use crate::product::Category;

/// A color swatch offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    /// Color name as matched against `Product::colors`.
    pub name: &'static str,

    /// Swatch fill in `#rrggbb` form.
    pub hex: &'static str,
}

/// Color swatches shown in the filter panel.
pub const COLOR_OPTIONS: [ColorOption; 6] = [
    ColorOption { name: "Black", hex: "#000000" },
    ColorOption { name: "White", hex: "#FFFFFF" },
    ColorOption { name: "Brown", hex: "#8B4513" },
    ColorOption { name: "Navy", hex: "#000080" },
    ColorOption { name: "Beige", hex: "#F5F5DC" },
    ColorOption { name: "Gray", hex: "#808080" },
];

/// Size buttons shown in the filter panel.
pub const SIZE_OPTIONS: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Category buttons shown in the filter panel, in display order.
pub const CATEGORY_OPTIONS: [Category; 5] = [
    Category::All,
    Category::Women,
    Category::Men,
    Category::Bags,
    Category::Shoes,
];
