//! The cart ledger.

use catalog::Product;
use common::{Money, ProductId};

use crate::event::CartEvent;
use crate::line::CartLine;
use crate::notify::{Notifier, NullNotifier};

/// The set of lines a shopper has added, with per-line quantity.
///
/// Lines keep insertion order, and there is at most one line per product id;
/// adding an already-present product increments its quantity instead.
/// Quantity reaching zero removes the line, so a zero-quantity line never
/// exists.
///
/// Every operation is total: nothing here can fail, and removing an absent
/// line is a no-op. Derived values are recomputed from the lines on each
/// read. Side effects go through the injected [`Notifier`].
#[derive(Debug, Default)]
pub struct Cart<N: Notifier = NullNotifier> {
    lines: Vec<CartLine>,
    notifier: N,
}

impl<N: Notifier> Cart<N> {
    /// Creates an empty cart with the given notification collaborator.
    pub fn new(notifier: N) -> Self {
        Self {
            lines: Vec::new(),
            notifier,
        }
    }

    /// Returns the notification collaborator.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for a product, if present.
    pub fn get_line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product.id == product_id)
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities (the header badge count).
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of unit price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// Adds one unit of the product.
    ///
    /// An existing line for the same product id is incremented; otherwise a
    /// new line with quantity 1 is appended. Always succeeds and emits the
    /// "added" notification.
    pub fn add(&mut self, product: &Product) {
        match self.position(&product.id) {
            Some(idx) => {
                self.lines[idx].quantity += 1;
                tracing::debug!(product_id = %product.id, quantity = self.lines[idx].quantity, "incremented cart line");
            }
            None => {
                self.lines.push(CartLine::new(product.clone()));
                tracing::debug!(product_id = %product.id, "appended cart line");
            }
        }

        self.emit(CartEvent::ItemAdded {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
        });
    }

    /// Replaces the quantity of an existing line.
    ///
    /// A quantity of 0 removes the line (silently; the "removed"
    /// notification belongs to [`Cart::remove`]). No-op when no line exists
    /// for the product.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        let Some(idx) = self.position(product_id) else {
            return;
        };

        if quantity == 0 {
            self.lines.remove(idx);
            tracing::debug!(%product_id, "removed cart line via zero quantity");
        } else {
            self.lines[idx].quantity = quantity;
            tracing::debug!(%product_id, quantity, "set cart line quantity");
        }
    }

    /// Deletes the line if present; state no-op otherwise.
    ///
    /// Always emits the "removed" notification, mirroring the storefront UI
    /// which confirms the gesture regardless.
    pub fn remove(&mut self, product_id: &ProductId) {
        if let Some(idx) = self.position(product_id) {
            self.lines.remove(idx);
            tracing::debug!(%product_id, "removed cart line");
        }

        self.emit(CartEvent::ItemRemoved {
            product_id: product_id.clone(),
        });
    }

    /// Applies a quantity delta, flooring at zero.
    ///
    /// `new = max(0, quantity + delta)`; zero delegates to [`Cart::remove`]
    /// (which notifies), anything else to [`Cart::set_quantity`]. The
    /// steppers only ever send ±1, but any delta works. No-op when no line
    /// exists for the product.
    pub fn adjust_quantity(&mut self, product_id: &ProductId, delta: i64) {
        let Some(line) = self.get_line(product_id) else {
            return;
        };

        let new_quantity = (i64::from(line.quantity) + delta).max(0);
        if new_quantity == 0 {
            self.remove(product_id);
        } else {
            let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            self.set_quantity(product_id, quantity);
        }
    }

    /// Pure checkout trigger.
    ///
    /// Emits the "checkout initiated" notification; no validation, discount
    /// computation, or payment logic lives here.
    pub fn checkout(&self) {
        self.emit(CartEvent::CheckoutInitiated);
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| &line.product.id == product_id)
    }

    fn emit(&self, event: CartEvent) {
        tracing::debug!(event = event.event_type(), "cart event");
        self.notifier.notify(event.notification());
    }
}
