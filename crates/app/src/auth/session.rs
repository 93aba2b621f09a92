//! Admin session cookie.
//!
//! Holding the cookie is the session: there is no server-side session table
//! and no logout, the cookie simply lapses after [`ADMIN_SESSION_TTL`].

use std::time::Duration;

/// Cookie carrying the admin flag.
pub const ADMIN_COOKIE_NAME: &str = "admin";

/// Value the admin cookie holds once a token has verified.
pub const ADMIN_COOKIE_VALUE: &str = "1";

/// How long an admin session lasts.
pub const ADMIN_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Whether a cookie value grants admin access.
#[must_use]
pub fn is_admin_cookie(value: Option<&str>) -> bool {
    value == Some(ADMIN_COOKIE_VALUE)
}
