//! Verify Admin Token Handler

use salvo::{
    http::cookie::{Cookie, SameSite},
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use vitrina_app::auth::{
    AdminToken,
    session::{ADMIN_COOKIE_NAME, ADMIN_COOKIE_VALUE, ADMIN_SESSION_TTL},
};

use crate::{
    error::{ApiError, MessageResponse},
    extensions::*,
};

/// Verify Admin Token Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyRequest {
    /// Plaintext admin token
    #[serde(default)]
    pub token: String,
}

/// Verify Admin Token Handler
///
/// Checks the token against the configured bcrypt hash and, on success, opens
/// an admin session by setting the admin cookie.
#[endpoint(tags("admin"), summary = "Verify Admin Token")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.state_or_500()?;

    let request = req
        .parse_json::<VerifyRequest>()
        .await
        .unwrap_or_default();

    if request.token.trim().is_empty() {
        return Err(ApiError::MissingToken);
    }

    state
        .app
        .admin
        .verify_token(AdminToken::new(request.token))
        .await?;

    res.add_cookie(admin_session_cookie(state.secure_cookies));

    info!("admin session granted");

    Ok(Json(MessageResponse::ok("Acceso concedido.")))
}

fn admin_session_cookie(secure: bool) -> Cookie<'static> {
    let max_age = time::Duration::try_from(ADMIN_SESSION_TTL).unwrap_or(time::Duration::MAX);

    Cookie::build((ADMIN_COOKIE_NAME, ADMIN_COOKIE_VALUE))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(secure)
        .build()
}
