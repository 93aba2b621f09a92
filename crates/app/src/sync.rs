//! Discount sync.

use tracing::{debug, warn};
use vitrina::{
    catalog::ProductId,
    discounts::{DiscountMapping, DiscountRecord},
};

use crate::{
    client::StorefrontClient,
    local::{LocalStore, LocalStoreError},
};

/// Where the discounts returned by [`sync_discounts`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountSource {
    /// Freshly fetched from the server.
    Server,

    /// The last-known local copy.
    Cache,
}

/// Fetch the server's discounts into the local cache.
///
/// Any failure falls back to the cached copy; there are no retries.
pub async fn sync_discounts(
    client: &StorefrontClient,
    store: &LocalStore,
) -> (DiscountMapping, DiscountSource) {
    match client.discounts().await {
        Ok(discounts) => {
            if let Err(error) = store.save_discounts(discounts.clone()).await {
                warn!(%error, "could not write synced discounts to the local store");
            }

            debug!(entries = discounts.len(), "discounts synced from server");

            (discounts, DiscountSource::Server)
        }
        Err(error) => {
            warn!(%error, "discount sync failed, using local copy");

            (store.discounts().await, DiscountSource::Cache)
        }
    }
}

/// How far a discount change reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountReach {
    /// Saved on the server for every visitor.
    Global,

    /// Saved in the local cache only.
    Local,
}

/// Set one product's discount and publish the whole mapping.
///
/// The current mapping is synced first so that other products' records are
/// kept. The change is written to the local cache before the server is
/// asked to store it, and stays there when the server refuses or cannot be
/// reached.
///
/// # Errors
///
/// Returns an error only if the local cache cannot be written.
pub async fn apply_discount(
    client: &StorefrontClient,
    store: &LocalStore,
    product: ProductId,
    record: DiscountRecord,
) -> Result<DiscountReach, LocalStoreError> {
    let (mut discounts, _source) = sync_discounts(client, store).await;

    discounts.set(product, record);

    store.save_discounts(discounts.clone()).await?;

    match client.save_discounts(&discounts).await {
        Ok(_) => Ok(DiscountReach::Global),
        Err(error) => {
            warn!(%error, product, "could not save discounts on the server");

            Ok(DiscountReach::Local)
        }
    }
}
