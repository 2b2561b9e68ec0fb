//! Per-session composition of the storefront core.
//!
//! A [`StorefrontSession`] owns one catalog view and one cart over a shared
//! product list — the two units the presentation layer reads and mutates in
//! response to user gestures. Each independent session gets its own
//! instance; there is no process-wide singleton and nothing is persisted
//! across sessions.

pub mod config;
mod session;
pub mod telemetry;

pub use config::Config;
pub use session::StorefrontSession;
