//! Get Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use vitrina::catalog::ProductId;

use crate::{catalog::models::ProductResponse, error::ApiError, extensions::*};

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(tags("catalog"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.state_or_500()?;

    let id = parse_product_id(&id.into_inner())?.ok_or(ApiError::ProductNotFound)?;

    let product = state.app.catalog.get_product(id).await?;

    Ok(Json(product.into()))
}

/// Read a product id from the path.
///
/// Non-numeric ids are rejected. Whole numbers written in any numeric form,
/// such as `1.0` or `1e0`, name the same product as `1`. Numbers that cannot
/// be a product id, such as `1.5` or `-3`, are valid input that simply matches
/// nothing.
fn parse_product_id(raw: &str) -> Result<Option<ProductId>, ApiError> {
    let raw = raw.trim();

    if let Ok(id) = raw.parse::<ProductId>() {
        return Ok(Some(id));
    }

    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(whole_number_id(number)),
        _ => Err(ApiError::InvalidProductId),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is checked to be a non-negative whole number below 2^53"
)]
fn whole_number_id(number: f64) -> Option<ProductId> {
    // Above 2^53 an f64 no longer names a single integer.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    (number.fract() == 0.0 && (0.0..=MAX_EXACT).contains(&number))
        .then(|| number as ProductId)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use vitrina::catalog::Catalog;
    use vitrina_app::domain::catalog::{CatalogServiceError, MockCatalogService};

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("api/products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut catalog = MockCatalogService::new();
        let product = Catalog::bundled()?
            .product(3)
            .cloned()
            .ok_or("bundled catalog has no product 3")?;

        catalog
            .expect_get_product()
            .once()
            .withf(|id| *id == 3)
            .return_once(move |_| Ok(product));

        catalog.expect_catalog().never();

        let mut res = TestClient::get("http://example.com/api/products/3")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.id, 3);
        assert_eq!(body.price, "Q20.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_product()
            .once()
            .withf(|id| *id == 999_999)
            .return_once(|id| Err(CatalogServiceError::NotFound(id)));

        catalog.expect_catalog().never();

        let mut res = TestClient::get("http://example.com/api/products/999999")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: Value = res.take_json().await?;

        assert_eq!(body, json!({ "error": "Product not found" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog.expect_get_product().never();
        catalog.expect_catalog().never();

        let mut res = TestClient::get("http://example.com/api/products/abc")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: Value = res.take_json().await?;

        assert_eq!(body, json!({ "error": "Invalid product id" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_fractional_id_returns_404_without_lookup() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog.expect_get_product().never();
        catalog.expect_catalog().never();

        let res = TestClient::get("http://example.com/api/products/1.5")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[test]
    fn non_finite_numbers_are_not_ids() {
        assert!(matches!(
            parse_product_id("NaN"),
            Err(ApiError::InvalidProductId)
        ));
        assert!(matches!(
            parse_product_id("inf"),
            Err(ApiError::InvalidProductId)
        ));
        assert!(matches!(parse_product_id("-3"), Ok(None)));
        assert!(matches!(parse_product_id("42"), Ok(Some(42))));
    }

    #[test]
    fn whole_numbers_in_any_form_are_ids() {
        for raw in ["1.0", "1e0", "01", "1.", "0.1e1"] {
            assert!(
                matches!(parse_product_id(raw), Ok(Some(1))),
                "{raw} should name product 1"
            );
        }

        assert!(matches!(parse_product_id("-0"), Ok(Some(0))));
        assert!(matches!(parse_product_id("1.5"), Ok(None)));
        assert!(matches!(parse_product_id("1e300"), Ok(None)));
        assert!(matches!(parse_product_id(""), Err(ApiError::InvalidProductId)));
    }

    #[tokio::test]
    async fn test_get_whole_float_id_looks_up_product() -> TestResult {
        let mut catalog = MockCatalogService::new();
        let product = Catalog::bundled()?
            .product(1)
            .cloned()
            .ok_or("bundled catalog has no product 1")?;

        catalog
            .expect_get_product()
            .once()
            .withf(|id| *id == 1)
            .return_once(move |_| Ok(product));

        catalog.expect_catalog().never();

        let mut res = TestClient::get("http://example.com/api/products/1.0")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.id, 1);

        Ok(())
    }
}
