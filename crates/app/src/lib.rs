//! Storefront application services, API client and local cache.

pub mod auth;
pub mod client;
pub mod context;
pub mod domain;
pub mod local;
pub mod orders;
pub mod render;
pub mod sync;
pub mod triggers;

#[cfg(test)]
mod test;
