//! Catalog side of the storefront core.
//!
//! This crate provides:
//! - `Product` and `Category`, the shape of the externally supplied product list
//! - `Catalog`, an ordered product list with a JSON loader
//! - `FilterState`, the advanced filter panel selections
//! - `CatalogView`, which derives the visible product subset from a search
//!   query, a selected top-level category, and a `FilterState`
//!
//! The catalog side holds no cart state and performs no side effects; every
//! derived value is recomputed from current state on each read.

mod catalog;
mod filter;
mod options;
mod product;
mod view;

pub use catalog::{Catalog, CatalogError};
pub use filter::{DEFAULT_PRICE_CEILING, DEFAULT_PRICE_FLOOR, FilterState};
pub use options::{CATEGORY_OPTIONS, COLOR_OPTIONS, ColorOption, SIZE_OPTIONS};
pub use product::{Category, Product};
pub use view::CatalogView;
