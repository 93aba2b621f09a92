//! Vitrina
//!
//! Vitrina is the storefront engine behind a small product catalog: it parses
//! catalog prices, evaluates time-limited discounts, renders offer countdowns,
//! tracks the admin unlock gesture and builds the outbound order message.
//!
//! Nothing in this crate performs I/O. Callers pass the current time in, so
//! every computation is a pure function of its inputs.

pub mod catalog;
pub mod countdown;
pub mod discounts;
pub mod gesture;
pub mod modal;
pub mod order;
pub mod prelude;
pub mod prices;
pub mod pricing;
