//! A single cart line.

use catalog::Product;
use common::Money;
use serde::{Deserialize, Serialize};

/// One entry in the cart: a product and how many of it.
///
/// Invariant: a line only exists with `quantity >= 1`; the cart removes the
/// line instead of storing a zero quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product: Product,

    /// Units of the product in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line with a single unit, the state after a first "add to
    /// cart" gesture.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Returns the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Category;

    #[test]
    fn new_line_starts_at_quantity_one() {
        let product = Product::new("p", "Coat", Money::from_dollars(200), Category::Women);
        let line = CartLine::new(product);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.line_total(), Money::from_dollars(200));
    }

    #[test]
    fn line_total_scales_with_quantity() {
        let product = Product::new("p", "Belt", Money::from_cents(7550), Category::Men);
        let mut line = CartLine::new(product);
        line.quantity = 3;
        assert_eq!(line.line_total(), Money::from_cents(22650));
    }

    #[test]
    fn line_serialization_roundtrip() {
        let product = Product::new("p", "Scarf", Money::from_dollars(120), Category::Women);
        let line = CartLine::new(product);
        let json = serde_json::to_string(&line).unwrap();
        let back: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, back);
    }
}
