//! App Router

use salvo::Router;

use crate::{admin, catalog, discounts, healthcheck};

/// Every storefront route, without state or server-level hoops.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("_health").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(Router::with_path("catalog").get(catalog::show::handler))
                .push(Router::with_path("products/{id}").get(catalog::product::handler))
                .push(
                    Router::with_path("discounts")
                        .get(discounts::index::handler)
                        .push(
                            Router::new()
                                .hoop(admin::middleware::require_admin)
                                .post(discounts::update::handler),
                        ),
                )
                .push(Router::with_path("verify").post(admin::verify::handler)),
        )
        .push(
            Router::with_path("admin")
                .push(Router::with_path("verify").post(admin::verify::handler))
                .push(Router::with_path("status").get(admin::status::handler)),
        )
}
