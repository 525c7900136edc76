//! Request descriptors for the platform dispatcher.

use serde::Serialize;
use serde_json::Value;

use crate::error::XummError;

/// HTTP method of a platform request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    /// Read request
    #[default]
    Get,
    /// Write request
    Post,
    /// Replace request
    Put,
    /// Delete request
    Delete,
}

impl HttpMethod {
    /// The uppercase method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Body of a platform request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON before sending
    Json(Value),
    /// Sent unmodified (already serialized)
    Raw(String),
}

impl RequestBody {
    /// The bytes to put on the wire.
    pub fn to_wire(&self) -> String {
        match self {
            RequestBody::Json(value) => value.to_string(),
            RequestBody::Raw(raw) => raw.clone(),
        }
    }
}

/// A single platform call: method, endpoint and optional body.
///
/// # Example
///
/// ```rust
/// use xumm_api_client::platform::{HttpMethod, Request};
///
/// let request = Request::get("ping");
/// assert_eq!(request.method, HttpMethod::Get);
/// assert!(request.body.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the platform base URL (e.g. `"rates/USD"`)
    pub endpoint: String,
    /// Optional payload
    pub body: Option<RequestBody>,
}

impl Request {
    /// Create a request with no body.
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
        }
    }

    /// Create a GET request.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    /// Create a POST request with a JSON payload.
    pub fn post<P: Serialize + ?Sized>(
        endpoint: impl Into<String>,
        payload: &P,
    ) -> Result<Self, XummError> {
        let endpoint = endpoint.into();
        let value = serde_json::to_value(payload)
            .map_err(|e| XummError::transport(HttpMethod::Post.as_str(), endpoint.clone(), e))?;
        Ok(Self::new(HttpMethod::Post, endpoint).with_body(RequestBody::Json(value)))
    }

    /// Attach a body.
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach an already serialized body.
    pub fn with_raw_body(self, body: impl Into<String>) -> Self {
        self.with_body(RequestBody::Raw(body.into()))
    }
}
