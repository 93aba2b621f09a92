//! API errors and the JSON bodies they render.
//!
//! Product routes answer failures with `{"error": ...}`; the discount and
//! admin routes answer with `{"ok": false, "message": ...}`. Internal
//! failures are logged in full and rendered with a generic message.

use std::error::Error as _;

use salvo::{
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::{Json, Response},
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use vitrina_app::{
    auth::AdminAuthError,
    domain::{catalog::CatalogServiceError, discounts::DiscountsServiceError},
};

const INTERNAL_ERROR_MESSAGE: &str = "Error interno";

/// Error body used by the product routes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// What went wrong
    pub error: String,
}

/// Outcome body used by the discount and admin routes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Whether the operation succeeded
    pub ok: bool,

    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("invalid product id")]
    InvalidProductId,

    #[error("product not found")]
    ProductNotFound,

    #[error("admin session required")]
    Unauthorized,

    #[error("discount payload is not a JSON object")]
    InvalidPayload,

    #[error("admin token missing from request")]
    MissingToken,

    #[error("admin token rejected")]
    InvalidToken,

    #[error("admin token hash is not configured")]
    NotConfigured,

    #[error("failed to read discounts")]
    ReadDiscounts(#[source] DiscountsServiceError),

    #[error("failed to save discounts")]
    SaveDiscounts(#[source] DiscountsServiceError),

    #[error("failed to verify admin token")]
    Verification(#[source] AdminAuthError),

    #[error("{0}")]
    Internal(&'static str),
}

enum Body {
    Error(&'static str),
    Message(&'static str),
}

impl ApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidProductId | Self::InvalidPayload | Self::MissingToken => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::ProductNotFound => StatusCode::NOT_FOUND,
            Self::NotConfigured
            | Self::ReadDiscounts(_)
            | Self::SaveDiscounts(_)
            | Self::Verification(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Body {
        match self {
            Self::InvalidProductId => Body::Error("Invalid product id"),
            Self::ProductNotFound => Body::Error("Product not found"),
            Self::ReadDiscounts(_) => Body::Error("Error leyendo descuentos"),
            Self::Unauthorized => Body::Message("No autorizado"),
            Self::InvalidPayload => Body::Message("Payload inválido"),
            Self::MissingToken => Body::Message("Token requerido"),
            Self::InvalidToken => Body::Message("Token inválido"),
            Self::NotConfigured => Body::Message("No hay token configurado en el servidor"),
            Self::SaveDiscounts(_) => Body::Message("No se pudo guardar descuentos"),
            Self::Verification(_) | Self::Internal(_) => Body::Message(INTERNAL_ERROR_MESSAGE),
        }
    }
}

impl From<CatalogServiceError> for ApiError {
    fn from(error: CatalogServiceError) -> Self {
        match error {
            CatalogServiceError::NotFound(_) => Self::ProductNotFound,
        }
    }
}

impl From<AdminAuthError> for ApiError {
    fn from(error: AdminAuthError) -> Self {
        match error {
            AdminAuthError::MissingToken => Self::MissingToken,
            AdminAuthError::NotConfigured => Self::NotConfigured,
            AdminAuthError::InvalidToken => Self::InvalidToken,
            AdminAuthError::Hash(_) | AdminAuthError::Join(_) => Self::Verification(error),
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        let status = self.status_code();

        if status.is_server_error() {
            match self.source() {
                Some(source) => error!("{self}: {source}"),
                None => error!("{self}"),
            }
        }

        res.status_code(status);

        match self.body() {
            Body::Error(error) => res.render(Json(ErrorResponse {
                error: error.to_string(),
            })),
            Body::Message(message) => res.render(Json(MessageResponse::failed(message))),
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad request"),
            (StatusCode::UNAUTHORIZED, "Unauthorized"),
            (StatusCode::NOT_FOUND, "Not found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", MessageResponse::to_schema(components)),
            );
        }
    }
}
