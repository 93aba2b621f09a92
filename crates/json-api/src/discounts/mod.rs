//! Discounts

mod handlers;

pub(crate) use handlers::*;
