//! State

use std::sync::Arc;

use vitrina_app::context::AppContext;

/// Shared per-server state injected into every request.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Marks the admin cookie `Secure`.
    pub(crate) secure_cookies: bool,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, secure_cookies: bool) -> Self {
        Self {
            app,
            secure_cookies,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, secure_cookies: bool) -> Arc<Self> {
        Arc::new(Self::new(app, secure_cookies))
    }
}
