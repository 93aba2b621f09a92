//! Catalog Handlers

pub(crate) mod product;
pub(crate) mod show;
