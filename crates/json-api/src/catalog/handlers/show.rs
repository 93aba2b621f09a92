//! Show Catalog Handler

use salvo::prelude::*;

use crate::{catalog::models::CatalogResponse, error::ApiError, extensions::*};

/// Show Catalog Handler
///
/// Returns the full catalog document.
#[endpoint(tags("catalog"), summary = "Get Catalog")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CatalogResponse>, ApiError> {
    let state = depot.state_or_500()?;

    let catalog = state.app.catalog.catalog().await?;

    Ok(Json(CatalogResponse::from(catalog.as_ref())))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vitrina::catalog::Catalog;
    use vitrina_app::domain::catalog::MockCatalogService;

    use crate::test_helpers::catalog_service;

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("api/catalog").get(handler))
    }

    #[tokio::test]
    async fn test_show_returns_every_product() -> TestResult {
        let mut catalog = MockCatalogService::new();
        let bundled = Catalog::bundled()?;
        let expected = bundled.products.len();

        catalog
            .expect_catalog()
            .once()
            .return_once(move || Ok(Arc::new(bundled)));

        catalog.expect_get_product().never();

        let mut res = TestClient::get("http://example.com/api/catalog")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CatalogResponse = res.take_json().await?;

        assert_eq!(body.products.len(), expected);
        assert_eq!(body.business_name, "Vitrina Demo");

        Ok(())
    }
}
