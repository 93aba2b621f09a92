//! Shared test fixtures.


pub(crate) use server::{TEST_ADMIN_TOKEN, TestServer};
pub(crate) use store::TestStore;
