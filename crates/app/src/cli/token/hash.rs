use clap::Args;
use vitrina_app::auth::{AdminToken, hash_admin_token};

#[derive(Debug, Args)]
pub(crate) struct HashTokenArgs {
    /// Plaintext admin token
    #[arg(env = "ADMIN_TOKEN", hide_env_values = true)]
    token: String,
}

pub(crate) fn run(args: &HashTokenArgs) -> Result<(), String> {
    let token = AdminToken::new(args.token.as_str());

    if token.expose().trim().is_empty() {
        return Err("token cannot be empty".to_string());
    }

    let hash =
        hash_admin_token(&token).map_err(|error| format!("failed to hash token: {error}"))?;

    println!("admin_token_hash: {hash}");

    Ok(())
}
