//! XUMM platform REST API client implementation.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
use crate::error::XummError;
use crate::platform::endpoints::XUMM_BASE_URL;
use crate::platform::request::Request;
use crate::platform::response::ApiResponse;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";
/// Header carrying the API secret.
pub const API_SECRET_HEADER: &str = "x-api-secret";

/// The XUMM platform REST API client.
///
/// Every method is a single request/response round trip. Nothing is
/// retried, cached or rate limited.
///
/// # Example
///
/// ```rust,no_run
/// use xumm_api_client::platform::XummRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = XummRestClient::new(
///         "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee",
///         "01234567-89ab-cdef-0123-456789abcdef",
///     )?;
///
///     let details = client.ping().await?;
///     println!("Application: {}", details.application.name);
///
///     Ok(())
/// }
/// ```
///
/// Credentials can also come from `XUMM_APIKEY` / `XUMM_APISECRET`:
///
/// ```rust,no_run
/// use xumm_api_client::platform::XummRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = XummRestClient::from_env()?;
///     let rates = client.get_rates("eur").await?;
///     println!("1 XRP = {} EUR", rates.xrp);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct XummRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
}

impl XummRestClient {
    /// Create a client for the given API key and secret.
    ///
    /// Fails with [`XummError::InvalidCredentials`] unless both are lowercase UUIDs.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, XummError> {
        let credentials = StaticCredentials::new(api_key, api_secret)?;
        Self::builder().credentials(Arc::new(credentials)).build()
    }

    /// Create a client from the `XUMM_APIKEY` and `XUMM_APISECRET` environment variables.
    pub fn from_env() -> Result<Self, XummError> {
        let credentials = EnvCredentials::from_env()?;
        Self::builder().credentials(Arc::new(credentials)).build()
    }

    /// Create a new client builder.
    pub fn builder() -> XummRestClientBuilder {
        XummRestClientBuilder::new()
    }

    /// The base URL every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credentials sent with every request.
    pub fn credentials(&self) -> &Credentials {
        self.credentials.get_credentials()
    }

    /// Send a request and decode the response body into `T`.
    ///
    /// The body is parsed as JSON whatever the HTTP status. Network and
    /// decode failures become [`XummError::Transport`] naming the method
    /// and endpoint. Error markers are not interpreted here.
    pub async fn call<T>(&self, request: &Request) -> Result<T, XummError>
    where
        T: DeserializeOwned,
    {
        let value = self.call_json(request).await?;
        serde_json::from_value(value).map_err(|e| self.transport_error(request, e))
    }

    /// Send a request and return the decoded JSON body untouched.
    pub async fn call_json(&self, request: &Request) -> Result<Value, XummError> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        let creds = self.credentials.get_credentials();

        tracing::debug!(
            method = %request.method,
            endpoint = %request.endpoint,
            "sending XUMM platform request"
        );

        let mut builder = self
            .http_client
            .request(request.method.into(), url.as_str())
            .header(API_KEY_HEADER, creds.api_key())
            .header(API_SECRET_HEADER, creds.expose_secret());

        if let Some(body) = &request.body {
            builder = builder.body(body.to_wire());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.transport_error(request, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(request, e))?;

        tracing::debug!(
            method = %request.method,
            endpoint = %request.endpoint,
            status = status.as_u16(),
            "received XUMM platform response"
        );

        serde_json::from_str(&body).map_err(|e| self.transport_error(request, e))
    }

    /// Send a request and classify the body as error marker or payload.
    pub async fn call_checked<T>(&self, request: &Request) -> Result<ApiResponse<T>, XummError>
    where
        T: DeserializeOwned,
    {
        let value = self.call_json(request).await?;
        let response =
            ApiResponse::from_value(value).map_err(|e| self.transport_error(request, e))?;

        if let ApiResponse::Error(error) = &response {
            tracing::warn!(
                method = %request.method,
                endpoint = %request.endpoint,
                code = ?error.code,
                reference = ?error.reference,
                "XUMM platform returned an error"
            );
        }

        Ok(response)
    }

    fn transport_error<E>(&self, request: &Request, source: E) -> XummError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        XummError::transport(request.method.as_str(), request.endpoint.as_str(), source)
    }
}

impl std::fmt::Debug for XummRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XummRestClient")
            .field("base_url", &self.base_url)
            .field("credentials", self.credentials.get_credentials())
            .finish()
    }
}

/// Builder for [`XummRestClient`].
pub struct XummRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
}

impl XummRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: XUMM_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// A trailing `/` is added when missing.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// Fails with [`XummError::MissingCredentials`] when no credentials were set.
    pub fn build(self) -> Result<XummRestClient, XummError> {
        let credentials = self.credentials.ok_or_else(|| {
            XummError::MissingCredentials("API key and secret are required".to_string())
        })?;

        let mut headers = HeaderMap::new();
        let user_agent = self.user_agent.unwrap_or_else(|| {
            format!("xumm-api-client/{} (rust) reqwest", env!("CARGO_PKG_VERSION"))
        });
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("xumm-api-client"));
        headers.insert(USER_AGENT, header_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(XummRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials,
        })
    }
}

impl Default for XummRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
