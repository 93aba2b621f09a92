//! Discounts

pub mod errors;
mod repository;
pub mod service;

pub use errors::DiscountsServiceError;
pub use service::*;
