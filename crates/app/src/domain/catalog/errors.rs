//! Catalog service errors.

use thiserror::Error;
use vitrina::catalog::ProductId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogServiceError {
    #[error("product {0} not found")]
    NotFound(ProductId),
}
