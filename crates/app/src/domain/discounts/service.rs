//! Discounts service.

use std::path::PathBuf;

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::debug;
use vitrina::discounts::DiscountMapping;

use crate::domain::discounts::{
    errors::DiscountsServiceError, repository::FileDiscountsRepository,
};

/// File-backed discount store.
///
/// Writes are serialized within the process; separate processes sharing the
/// file still race, last write wins.
#[derive(Debug)]
pub struct FileDiscountsService {
    repository: FileDiscountsRepository,
    write_lock: Mutex<()>,
}

impl FileDiscountsService {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            repository: FileDiscountsRepository::new(path),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl DiscountsService for FileDiscountsService {
    async fn get_discounts(&self) -> Result<DiscountMapping, DiscountsServiceError> {
        self.repository.read().await
    }

    async fn replace_discounts(
        &self,
        discounts: DiscountMapping,
    ) -> Result<(), DiscountsServiceError> {
        let _guard = self.write_lock.lock().await;

        self.repository.write(&discounts).await?;

        debug!(
            path = %self.repository.path().display(),
            entries = discounts.len(),
            "discount store replaced"
        );

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait DiscountsService: Send + Sync {
    /// Retrieves the stored discount mapping, exactly as written.
    async fn get_discounts(&self) -> Result<DiscountMapping, DiscountsServiceError>;

    /// Replaces the whole discount mapping.
    async fn replace_discounts(
        &self,
        discounts: DiscountMapping,
    ) -> Result<(), DiscountsServiceError>;
}
