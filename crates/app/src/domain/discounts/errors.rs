//! Discounts service errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscountsServiceError {
    #[error("failed to read discount store")]
    Read(#[source] io::Error),

    #[error("failed to write discount store")]
    Write(#[source] io::Error),

    #[error("discount store is not valid JSON")]
    Parse(#[source] serde_json::Error),

    #[error("failed to encode discount mapping")]
    Encode(#[source] serde_json::Error),

    #[error("discount store does not hold a JSON object")]
    NotAnObject,
}
