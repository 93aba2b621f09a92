//! Admin authentication

mod errors;
mod service;
pub mod session;
mod token;

pub use errors::*;
pub use service::*;
pub use token::*;
