//! Admin auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::auth::{AdminAuthError, AdminToken};

/// Verifies admin tokens against a configured bcrypt hash.
#[derive(Debug, Clone)]
pub struct BcryptAdminService {
    token_hash: Option<String>,
}

impl BcryptAdminService {
    #[must_use]
    pub fn new(token_hash: Option<String>) -> Self {
        Self {
            token_hash: token_hash.filter(|hash| !hash.trim().is_empty()),
        }
    }
}

#[async_trait]
impl AdminService for BcryptAdminService {
    async fn verify_token(&self, token: AdminToken) -> Result<(), AdminAuthError> {
        if token.expose().is_empty() {
            return Err(AdminAuthError::MissingToken);
        }

        let Some(hash) = self.token_hash.clone() else {
            warn!("admin token verification attempted without a configured hash");

            return Err(AdminAuthError::NotConfigured);
        };

        let valid =
            tokio::task::spawn_blocking(move || bcrypt::verify(token.expose().trim(), &hash))
                .await??;

        if !valid {
            return Err(AdminAuthError::InvalidToken);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Checks a submitted admin token.
    async fn verify_token(&self, token: AdminToken) -> Result<(), AdminAuthError>;
}
