//! Catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use vitrina::catalog::{Catalog, Product, ProductId};

use crate::domain::catalog::errors::CatalogServiceError;

/// Serves a catalog loaded once at startup.
#[derive(Debug, Clone)]
pub struct StaticCatalogService {
    catalog: Arc<Catalog>,
}

impl StaticCatalogService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[async_trait]
impl CatalogService for StaticCatalogService {
    async fn catalog(&self) -> Result<Arc<Catalog>, CatalogServiceError> {
        Ok(Arc::clone(&self.catalog))
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogServiceError> {
        self.catalog
            .product(id)
            .cloned()
            .ok_or(CatalogServiceError::NotFound(id))
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieve the full catalog.
    async fn catalog(&self) -> Result<Arc<Catalog>, CatalogServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogServiceError>;
}
