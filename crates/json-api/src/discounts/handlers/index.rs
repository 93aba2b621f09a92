//! List Discounts Handler

use salvo::prelude::*;
use serde_json::Value;

use crate::{error::ApiError, extensions::*};

/// List Discounts Handler
///
/// Returns the stored discount mapping exactly as it was last saved, expired
/// entries included.
#[endpoint(tags("discounts"), summary = "List Discounts")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Value>, ApiError> {
    let state = depot.state_or_500()?;

    let discounts = state
        .app
        .discounts
        .get_discounts()
        .await
        .map_err(ApiError::ReadDiscounts)?;

    Ok(Json(discounts.into_value()))
}
