//! Cart side-effect events.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::notify::Notification;

/// Events the cart reports to the outside world.
///
/// These carry just enough to word the shopper-facing notification; the
/// cart's own state is the ledger, not an event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CartEvent {
    /// A product was added to the cart (or its quantity incremented).
    ItemAdded {
        product_id: ProductId,
        product_name: String,
    },

    /// A line was removed from the cart.
    ItemRemoved { product_id: ProductId },

    /// The shopper pressed checkout.
    CheckoutInitiated,
}

impl CartEvent {
    /// Returns the event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "ItemAdded",
            CartEvent::ItemRemoved { .. } => "ItemRemoved",
            CartEvent::CheckoutInitiated => "CheckoutInitiated",
        }
    }

    /// Words the shopper-facing notification for this event.
    pub fn notification(&self) -> Notification {
        match self {
            CartEvent::ItemAdded { product_name, .. } => Notification::new(
                "Added to cart",
                format!("{product_name} has been added to your cart."),
            ),
            CartEvent::ItemRemoved { .. } => Notification::new(
                "Removed from cart",
                "Item has been removed from your cart.",
            ),
            CartEvent::CheckoutInitiated => Notification::new(
                "Checkout initiated",
                "Redirecting to secure checkout...",
            ),
        }
    }
}
