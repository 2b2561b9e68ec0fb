//! Embedder configuration loaded from environment variables.

use std::path::PathBuf;

/// Storefront configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `STOREFRONT_CATALOG` — optional path to the product list JSON file
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    /// Where to load the product list from; `None` means the embedder
    /// supplies the catalog directly.
    pub catalog_path: Option<PathBuf>,

    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            catalog_path: std::env::var("STOREFRONT_CATALOG").ok().map(PathBuf::from),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "info".to_string(),
        }
    }
}
