use vitrina_app::auth::{generate_admin_token, hash_admin_token};

pub(crate) fn run() -> Result<(), String> {
    let token = generate_admin_token();

    let hash =
        hash_admin_token(&token).map_err(|error| format!("failed to hash token: {error}"))?;

    println!("admin_token: {}", token.expose());
    println!("admin_token_hash: {hash}");
    println!("set ADMIN_TOKEN_HASH={hash} on the server");
    println!("store this token now; it is only shown once");

    Ok(())
}
