//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    auth::{AdminService, BcryptAdminService},
    domain::{
        catalog::{CatalogService, StaticCatalogService},
        discounts::{DiscountsService, FileDiscountsService},
    },
};
use vitrina::catalog::{Catalog, CatalogError};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to read catalog file")]
    ReadCatalog(#[source] std::io::Error),

    #[error("invalid catalog")]
    Catalog(#[source] CatalogError),
}

/// Where the application context gets its data from.
#[derive(Debug, Clone)]
pub struct AppSettings<'a> {
    /// Catalog document; the bundled catalog is used when unset.
    pub catalog_path: Option<&'a Path>,

    /// Discount store file.
    pub discounts_path: &'a Path,

    /// bcrypt hash of the admin token.
    pub admin_token_hash: Option<String>,
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub discounts: Arc<dyn DiscountsService>,
    pub admin: Arc<dyn AdminService>,
}

impl AppContext {
    /// Build application context from settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be read or parsed.
    pub async fn from_settings(settings: AppSettings<'_>) -> Result<Self, AppInitError> {
        let catalog = match settings.catalog_path {
            Some(path) => {
                let source = tokio::fs::read_to_string(path)
                    .await
                    .map_err(AppInitError::ReadCatalog)?;

                Catalog::from_yaml(&source).map_err(AppInitError::Catalog)?
            }
            None => Catalog::bundled().map_err(AppInitError::Catalog)?,
        };

        Ok(Self {
            catalog: Arc::new(StaticCatalogService::new(catalog)),
            discounts: Arc::new(FileDiscountsService::new(settings.discounts_path)),
            admin: Arc::new(BcryptAdminService::new(settings.admin_token_hash)),
        })
    }
}
