//! Vitrina Domain Concerns

pub mod catalog;
pub mod discounts;
