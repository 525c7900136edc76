//! Error types for the XUMM client library.

use serde_json::Value;
use thiserror::Error;

/// Boxed error kept as the source of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for all XUMM client operations.
#[derive(Error, Debug)]
pub enum XummError {
    /// The API key and/or secret is not a lowercase UUID.
    #[error("Invalid API Key and/or API Secret. Use dotenv or constructor params.")]
    InvalidCredentials,

    /// No credentials were configured.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Building the HTTP client failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request could not be sent or the body was not JSON.
    #[error("Unexpected response from XUMM API [{method}:{endpoint}]")]
    Transport {
        /// HTTP method of the failed request (e.g. "GET")
        method: String,
        /// Endpoint path relative to the platform base URL
        endpoint: String,
        /// Underlying network or decode failure
        #[source]
        source: BoxError,
    },

    /// XUMM API returned an error
    #[error("XUMM API error: {0}")]
    Api(ApiError),

    /// A success response was missing an expected field.
    #[error("{0}")]
    UnexpectedResponse(String),
}

impl XummError {
    /// Wrap a transport or decode failure for the given request.
    pub fn transport(
        method: impl Into<String>,
        endpoint: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Transport {
            method: method.into(),
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    /// Check if this error is a configuration error raised before any request.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::MissingCredentials(_))
    }
}

/// Error marker returned by the XUMM API in a response body.
///
/// The platform answers failed calls with `{"error": {"reference": "...", "code": 812}}`.
/// Only the marker itself is interpreted; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiError {
    /// Numeric error code, if present
    pub code: Option<i64>,
    /// Reference to look up in the XUMM developer console
    pub reference: Option<String>,
    /// Free-form message, if present
    pub message: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "Error code {code}")?,
            None => write!(f, "Error")?,
        }
        if let Some(message) = &self.message {
            write!(f, " ({message})")?;
        }
        if let Some(reference) = &self.reference {
            write!(f, ", see XUMM Dev Console, reference: {reference}")?;
        }
        Ok(())
    }
}

impl ApiError {
    /// Extract the error marker from a decoded response body.
    ///
    /// Returns `None` unless the body carries an `error` field holding an
    /// object or `true`.
    pub fn from_body(body: &Value) -> Option<Self> {
        match body.get("error")? {
            Value::Object(fields) => Some(Self {
                code: fields.get("code").and_then(code_from_value),
                reference: fields
                    .get("reference")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                message: fields
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
            Value::Bool(true) => Some(Self {
                message: body
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                ..Self::default()
            }),
            _ => None,
        }
    }
}

// Codes arrive as numbers, occasionally as numeric strings.
fn code_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_from_object_marker() {
        let body = json!({ "error": { "reference": "a1b2", "code": 812 } });
        let error = ApiError::from_body(&body).unwrap();
        assert_eq!(error.code, Some(812));
        assert_eq!(error.reference.as_deref(), Some("a1b2"));
        assert_eq!(
            error.to_string(),
            "Error code 812, see XUMM Dev Console, reference: a1b2"
        );
    }

    #[test]
    fn test_api_error_string_code() {
        let body = json!({ "error": { "code": "404" } });
        assert_eq!(ApiError::from_body(&body).unwrap().code, Some(404));
    }

    #[test]
    fn test_no_marker() {
        assert!(ApiError::from_body(&json!({ "pong": true })).is_none());
        assert!(ApiError::from_body(&json!({ "error": false })).is_none());
        assert!(ApiError::from_body(&json!({ "error": null })).is_none());
        assert!(ApiError::from_body(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_bool_marker_takes_message() {
        let body = json!({ "error": true, "message": "Invalid token" });
        let error = ApiError::from_body(&body).unwrap();
        assert_eq!(error.message.as_deref(), Some("Invalid token"));
        assert_eq!(error.to_string(), "Error (Invalid token)");
    }

    #[test]
    fn test_transport_display_names_method_and_endpoint() {
        let err = XummError::transport("POST", "kyc-status", "connection refused");
        assert_eq!(
            err.to_string(),
            "Unexpected response from XUMM API [POST:kyc-status]"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }
}
