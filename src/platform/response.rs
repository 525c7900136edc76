//! Response discrimination for platform calls.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, XummError};

/// A decoded platform response: either an error marker or a success payload.
///
/// Built right after the body is decoded so callers never see an error
/// envelope typed as a success shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// The body carried an `error` marker
    Error(ApiError),
    /// The body is the expected payload
    Success(T),
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Classify a decoded JSON body.
    ///
    /// An error marker wins over any other field; otherwise the body must
    /// deserialize into `T`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if let Some(error) = ApiError::from_body(&value) {
            return Ok(ApiResponse::Error(error));
        }
        serde_json::from_value(value).map(ApiResponse::Success)
    }
}

impl<T> ApiResponse<T> {
    /// Whether the response carried an error marker.
    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }

    /// Convert into a `Result`, mapping the error marker to [`XummError::Api`].
    pub fn into_result(self) -> Result<T, XummError> {
        match self {
            ApiResponse::Error(error) => Err(XummError::Api(error)),
            ApiResponse::Success(value) => Ok(value),
        }
    }
}
