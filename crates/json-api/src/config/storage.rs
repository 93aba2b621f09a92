//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Catalog and discount file locations.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Discount store file
    #[arg(long, env = "DISCOUNTS_PATH", default_value = "discounts.json")]
    pub discounts_path: PathBuf,

    /// Catalog document (YAML or JSON); the bundled catalog is served when unset
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog_path: Option<PathBuf>,
}
