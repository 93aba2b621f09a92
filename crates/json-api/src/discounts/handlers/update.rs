//! Replace Discounts Handler

use salvo::prelude::*;
use serde_json::Value;
use tracing::info;

use vitrina::discounts::DiscountMapping;

use crate::{
    error::{ApiError, MessageResponse},
    extensions::*,
};

/// Replace Discounts Handler
///
/// Overwrites the whole discount mapping with the request body. Requires an
/// admin session.
#[endpoint(tags("discounts"), summary = "Replace Discounts")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.state_or_500()?;

    let body = req
        .parse_json::<Value>()
        .await
        .map_err(|_ignored| ApiError::InvalidPayload)?;

    let mapping = DiscountMapping::from_value(body).map_err(|_ignored| ApiError::InvalidPayload)?;
    let entries = mapping.len();

    state
        .app
        .discounts
        .replace_discounts(mapping)
        .await
        .map_err(ApiError::SaveDiscounts)?;

    info!(entries, "discounts replaced");

    Ok(Json(MessageResponse::ok("Descuentos guardados")))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use vitrina_app::domain::discounts::{DiscountsServiceError, MockDiscountsService};

    use crate::{admin::middleware, test_helpers::discounts_service};

    use super::*;

    fn make_service(discounts: MockDiscountsService) -> Service {
        discounts_service(
            discounts,
            Router::with_path("api/discounts")
                .hoop(middleware::require_admin)
                .post(handler),
        )
    }

    #[tokio::test]
    async fn test_update_replaces_mapping() -> TestResult {
        let mut discounts = MockDiscountsService::new();
        let payload = json!({ "4": { "percent": 15, "expiresAt": "2030-06-01T00:00:00Z" } });
        let expected = payload.clone();

        discounts
            .expect_replace_discounts()
            .once()
            .withf(move |mapping| Some(mapping.entries()) == expected.as_object())
            .return_once(|_| Ok(()));

        discounts.expect_get_discounts().never();

        let mut res = TestClient::post("http://example.com/api/discounts")
            .add_header(COOKIE, "admin=1", true)
            .json(&payload)
            .send(&make_service(discounts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: MessageResponse = res.take_json().await?;

        assert!(body.ok);
        assert_eq!(body.message, "Descuentos guardados");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_without_cookie_returns_401() -> TestResult {
        let mut discounts = MockDiscountsService::new();

        discounts.expect_replace_discounts().never();
        discounts.expect_get_discounts().never();

        let mut res = TestClient::post("http://example.com/api/discounts")
            .json(&json!({ "1": { "percent": 50, "expiresAt": "2030-01-01T00:00:00Z" } }))
            .send(&make_service(discounts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        let body: MessageResponse = res.take_json().await?;

        assert!(!body.ok);
        assert_eq!(body.message, "No autorizado");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_non_object_returns_400() -> TestResult {
        let mut discounts = MockDiscountsService::new();

        discounts.expect_replace_discounts().never();
        discounts.expect_get_discounts().never();

        let res = TestClient::post("http://example.com/api/discounts")
            .add_header(COOKIE, "admin=1", true)
            .json(&json!([1, 2, 3]))
            .send(&make_service(discounts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_write_failure_returns_500() -> TestResult {
        let mut discounts = MockDiscountsService::new();

        discounts
            .expect_replace_discounts()
            .once()
            .return_once(|_| Err(DiscountsServiceError::NotAnObject));

        discounts.expect_get_discounts().never();

        let mut res = TestClient::post("http://example.com/api/discounts")
            .add_header(COOKIE, "admin=1", true)
            .json(&json!({}))
            .send(&make_service(discounts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(body.message, "No se pudo guardar descuentos");

        Ok(())
    }
}
