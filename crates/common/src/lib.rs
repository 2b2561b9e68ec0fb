//! Shared value objects for the storefront core.
//!
//! These types are used by both the catalog and cart crates, which are
//! otherwise independent of each other.

mod types;

pub use types::{Money, ProductId, SessionId};
