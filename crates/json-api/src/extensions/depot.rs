//! Depot helper extensions.

use std::sync::Arc;

use crate::{error::ApiError, state::State};

/// Typed access to values the router injects into the depot.
pub(crate) trait DepotExt {
    /// The shared server state, or an internal error when it was never injected.
    fn state_or_500(&self) -> Result<Arc<State>, ApiError>;
}

impl DepotExt for salvo::Depot {
    fn state_or_500(&self) -> Result<Arc<State>, ApiError> {
        self.obtain::<Arc<State>>()
            .map(Arc::clone)
            .map_err(|_ignored| ApiError::Internal("server state missing from depot"))
    }
}
