//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use vitrina_app::{
    auth::MockAdminService,
    context::AppContext,
    domain::{catalog::MockCatalogService, discounts::MockDiscountsService},
};

use crate::state::State;

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_catalog().never();
    catalog.expect_get_product().never();

    catalog
}

fn strict_discounts_mock() -> MockDiscountsService {
    let mut discounts = MockDiscountsService::new();

    discounts.expect_get_discounts().never();
    discounts.expect_replace_discounts().never();

    discounts
}

fn strict_admin_mock() -> MockAdminService {
    let mut admin = MockAdminService::new();

    admin.expect_verify_token().never();

    admin
}

fn make_state(
    catalog: MockCatalogService,
    discounts: MockDiscountsService,
    admin: MockAdminService,
    secure_cookies: bool,
) -> Arc<State> {
    let app = AppContext {
        catalog: Arc::new(catalog),
        discounts: Arc::new(discounts),
        admin: Arc::new(admin),
    };

    State::from_app_context(app, secure_cookies)
}

fn service_with(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service_with(
        make_state(catalog, strict_discounts_mock(), strict_admin_mock(), false),
        route,
    )
}

pub(crate) fn discounts_service(discounts: MockDiscountsService, route: Router) -> Service {
    service_with(
        make_state(strict_catalog_mock(), discounts, strict_admin_mock(), false),
        route,
    )
}

pub(crate) fn admin_service(admin: MockAdminService, secure_cookies: bool, route: Router) -> Service {
    service_with(
        make_state(strict_catalog_mock(), strict_discounts_mock(), admin, secure_cookies),
        route,
    )
}
