//! Storefront API client.
//!
//! The client keeps a cookie jar for its lifetime, so an admin session
//! obtained through [`StorefrontClient::verify_token`] authorises later
//! discount writes made with the same client.

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use vitrina::{catalog::Catalog, discounts::DiscountMapping, gesture::VerifyResult};

use crate::auth::AdminToken;

/// Default API origin.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

type UrlParseError = <Url as std::str::FromStr>::Err;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL")]
    BaseUrl(#[source] UrlParseError),

    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    #[error("request failed")]
    Request(#[from] reqwest::Error),

    #[error("server responded with {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("server returned an unexpected payload")]
    Payload,
}

/// Body returned by the verify and discount-write endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub ok: bool,

    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct AdminStatus {
    admin: bool,
}

#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: Client,
    base: Url,
}

impl StorefrontClient {
    /// Create a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(ClientError::BaseUrl)?;

        let http = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { http, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base.join(path).map_err(ClientError::BaseUrl)
    }

    /// Fetch the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status.
    pub async fn catalog(&self) -> Result<Catalog, ClientError> {
        let response = self.http.get(self.endpoint("/api/catalog")?).send().await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// Fetch the discount mapping.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a body
    /// that is not a JSON object.
    pub async fn discounts(&self) -> Result<DiscountMapping, ClientError> {
        let response = self
            .http
            .get(self.endpoint("/api/discounts")?)
            .send()
            .await?;

        let value: Value = ensure_success(response).await?.json().await?;

        DiscountMapping::from_value(value).map_err(|_err| ClientError::Payload)
    }

    /// Submit an admin token.
    ///
    /// A rejection by the server is a [`VerifyResult::Rejected`], not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request itself fails.
    pub async fn verify_token(&self, token: &AdminToken) -> Result<VerifyResult, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/admin/verify")?)
            .json(&VerifyRequest {
                token: token.expose(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<ApiMessage>().await.unwrap_or_default();

        debug!(%status, ok = body.ok, "admin token verification response");

        if status.is_success() && body.ok {
            return Ok(VerifyResult::Accepted(body.message));
        }

        Ok(VerifyResult::Rejected(
            body.message.unwrap_or_else(|| "Token inválido".to_string()),
        ))
    }

    /// Replace the server's discount mapping.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status, e.g.
    /// when the client holds no admin session.
    pub async fn save_discounts(&self, discounts: &DiscountMapping) -> Result<ApiMessage, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/api/discounts")?)
            .json(discounts)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// Whether this client currently holds an admin session.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status.
    pub async fn admin_status(&self) -> Result<bool, ClientError> {
        let response = self.http.get(self.endpoint("/admin/status")?).send().await?;

        let status: AdminStatus = ensure_success(response).await?.json().await?;

        Ok(status.admin)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ApiMessage>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());

    Err(ClientError::Status { status, message })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;
    use crate::test::{TEST_ADMIN_TOKEN, TestServer};

    #[test]
    fn endpoints_resolve_against_base() -> TestResult {
        let client = StorefrontClient::new("http://localhost:3000/")?;

        assert_eq!(
            client.endpoint("/api/discounts")?.as_str(),
            "http://localhost:3000/api/discounts"
        );

        Ok(())
    }

    #[test]
    fn invalid_base_is_rejected() {
        let result = StorefrontClient::new("not a url");

        assert!(
            matches!(result, Err(ClientError::BaseUrl(_))),
            "expected BaseUrl, got {result:?}"
        );
    }

    #[tokio::test]
    async fn session_cookie_carries_from_verify_to_save() -> TestResult {
        let server = TestServer::start(json!({})).await?;
        let client = server.client()?;

        assert!(!client.admin_status().await?);

        let result = client
            .verify_token(&AdminToken::new(TEST_ADMIN_TOKEN.to_string()))
            .await?;

        assert_eq!(result, VerifyResult::Accepted(Some("Acceso concedido.".to_string())));
        assert!(client.admin_status().await?);

        let discounts =
            DiscountMapping::from_value(json!({ "1": { "percent": 20, "expiresAt": 65_000 } }))?;

        let saved = client.save_discounts(&discounts).await?;

        assert!(saved.ok);
        assert_eq!(server.discounts().await, discounts.into_value());

        Ok(())
    }

    #[tokio::test]
    async fn rejected_token_is_a_result_not_an_error() -> TestResult {
        let server = TestServer::start(json!({})).await?;
        let client = server.client()?;

        let result = client
            .verify_token(&AdminToken::new("guess".to_string()))
            .await?;

        assert_eq!(result, VerifyResult::Rejected("Token inválido".to_string()));
        assert!(!client.admin_status().await?);

        Ok(())
    }

    #[tokio::test]
    async fn save_without_session_reports_server_message() -> TestResult {
        let server = TestServer::start(json!({})).await?;
        let client = server.client()?;

        let result = client.save_discounts(&DiscountMapping::new()).await;

        match result {
            Err(ClientError::Status { status, message }) => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(message, "No autorizado");
            }
            other => return Err(format!("expected 401, got {other:?}").into()),
        }

        assert_eq!(server.discounts().await, json!({}));

        Ok(())
    }
}
