//! Cart side of the storefront core.
//!
//! This crate provides:
//! - `Cart`, the ledger of lines a shopper has added, with per-line quantity
//! - `CartLine`, one product paired with a quantity
//! - `CartEvent` and `Notification`, the side-effect boundary
//! - `Notifier`, the injected notification collaborator, with a discarding
//!   and a recording implementation
//!
//! The cart holds no catalog state; it only ever sees the products handed to
//! [`Cart::add`]. Every operation is total and completes within one
//! interaction turn.

mod cart;
mod event;
mod line;
mod notify;

pub use cart::Cart;
pub use event::CartEvent;
pub use line::CartLine;
pub use notify::{Notification, Notifier, NullNotifier, RecordingNotifier};
