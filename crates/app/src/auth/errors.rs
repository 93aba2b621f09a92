//! Admin auth errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminAuthError {
    #[error("admin token is required")]
    MissingToken,

    #[error("no admin token hash is configured")]
    NotConfigured,

    #[error("admin token is invalid")]
    InvalidToken,

    #[error("bcrypt error")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token verification task failed")]
    Join(#[from] tokio::task::JoinError),
}
