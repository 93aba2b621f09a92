//! Admin Config

use clap::Args;

/// Admin token settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// bcrypt hash of the admin token; verification fails with 500 when unset
    #[arg(long, env = "ADMIN_TOKEN_HASH", hide_env_values = true)]
    pub admin_token_hash: Option<String>,
}
