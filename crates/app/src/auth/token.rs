//! Admin token generation and hashing.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use zeroize::Zeroize;

/// Number of random bytes in a generated admin token.
pub const ADMIN_TOKEN_BYTES: usize = 16;

/// bcrypt cost used for admin token hashes.
pub const ADMIN_TOKEN_HASH_COST: u32 = 12;

/// A plaintext admin token, wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminToken {
    value: String,
}

impl AdminToken {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(**redacted**)")?;
        Ok(())
    }
}

impl Drop for AdminToken {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Generate a random hex-encoded admin token.
#[must_use]
pub fn generate_admin_token() -> AdminToken {
    let mut bytes = [0_u8; ADMIN_TOKEN_BYTES];

    OsRng.fill_bytes(&mut bytes);

    let token = AdminToken::new(encode_hex(&bytes));

    bytes.zeroize();

    token
}

/// Hash a token for the `ADMIN_TOKEN_HASH` setting.
///
/// # Errors
///
/// Returns an error if bcrypt fails to hash the token.
pub fn hash_admin_token(token: &AdminToken) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(token.expose().trim(), ADMIN_TOKEN_HASH_COST)
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
