//! Admin Status Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::admin::middleware::has_admin_session;

/// Admin session status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminStatusResponse {
    /// Whether the caller holds an admin session
    pub admin: bool,
}

/// Admin Status Handler
#[endpoint(tags("admin"), summary = "Admin Session Status")]
pub(crate) async fn handler(req: &mut Request) -> Json<AdminStatusResponse> {
    Json(AdminStatusResponse {
        admin: has_admin_session(req),
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    fn make_service() -> Service {
        Service::new(Router::with_path("admin/status").get(handler))
    }

    #[tokio::test]
    async fn test_status_without_cookie_is_not_admin() -> TestResult {
        let body: AdminStatusResponse = TestClient::get("http://example.com/admin/status")
            .send(&make_service())
            .await
            .take_json()
            .await?;

        assert!(!body.admin);

        Ok(())
    }

    #[tokio::test]
    async fn test_status_with_cookie_is_admin() -> TestResult {
        let body: AdminStatusResponse = TestClient::get("http://example.com/admin/status")
            .add_header(COOKIE, "admin=1", true)
            .send(&make_service())
            .await
            .take_json()
            .await?;

        assert!(body.admin);

        Ok(())
    }
}
