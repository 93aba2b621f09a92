//! Admin session middleware.

use salvo::prelude::*;
use tracing::warn;

use vitrina_app::auth::session::{ADMIN_COOKIE_NAME, is_admin_cookie};

use crate::error::ApiError;

/// Rejects the request with 401 unless it carries the admin session cookie.
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if !has_admin_session(req) {
        warn!(path = %req.uri().path(), "admin session required");

        res.render(ApiError::Unauthorized);
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn has_admin_session(req: &Request) -> bool {
    is_admin_cookie(req.cookie(ADMIN_COOKIE_NAME).map(|cookie| cookie.value()))
}
